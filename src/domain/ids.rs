//! Opaque identifiers for assets and accounts.

use core::fmt;

use serde::{Deserialize, Serialize};

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name([u8; 32]);

        impl $name {
            /// Creates an identifier from raw bytes.
            #[must_use]
            pub const fn from_bytes(bytes: [u8; 32]) -> Self {
                Self(bytes)
            }

            /// Returns the underlying 32-byte representation.
            #[must_use]
            pub const fn as_bytes(&self) -> [u8; 32] {
                self.0
            }

            /// Returns the all-zero identifier.
            #[must_use]
            pub const fn zero() -> Self {
                Self([0u8; 32])
            }
        }

        impl fmt::Display for $name {
            /// Short hex form: the first four bytes.
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                for b in &self.0[..4] {
                    write!(f, "{b:02x}")?;
                }
                Ok(())
            }
        }
    };
}

opaque_id!(
    /// Identifier of an underlying asset ledger (the token contract
    /// address in an on-chain deployment).
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_swap::domain::AssetId;
    ///
    /// let id = AssetId::from_bytes([1u8; 32]);
    /// assert_eq!(id.as_bytes(), [1u8; 32]);
    /// ```
    AssetId
);

opaque_id!(
    /// Identity of a party: a depositor, a trader, or a recipient.
    AccountId
);
