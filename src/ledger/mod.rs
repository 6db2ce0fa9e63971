//! Reference [`AssetLedger`](crate::traits::AssetLedger) implementations.

mod in_memory;

pub use in_memory::InMemoryLedger;
