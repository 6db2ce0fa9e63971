//! Construction of a pool from its declarative configuration.
//!
//! [`FromConfig`] gives every configurable type a uniform constructor.
//! Implementations **must** validate the configuration before building
//! anything: a successfully constructed value is guaranteed to start in a
//! valid state.
//!
//! ```text
//! PoolConfig --validate()--> Pool::from_config(&cfg) --> empty Pool
//! ```

use crate::error::SwapError;

/// Builds `Self` from a configuration of type `C`.
///
/// # Errors
///
/// Returns [`SwapError::InvalidConfiguration`] (or a more specific
/// variant) if the configuration is invalid.
pub trait FromConfig<C> {
    /// Creates a new instance from `config`.
    ///
    /// # Errors
    ///
    /// Propagates any validation failure of `config`.
    fn from_config(config: &C) -> Result<Self, SwapError>
    where
        Self: Sized;
}
