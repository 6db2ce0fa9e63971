//! Declarative pool blueprint.
//!
//! A [`PoolConfig`] describes the immutable identity of a pool.  It is
//! validated on construction and consumed by
//! [`FromConfig`](crate::traits::FromConfig).

mod pool_config;

pub use pool_config::PoolConfig;
