//! Deadline enforcement.

use crate::domain::Timestamp;
use crate::error::SwapError;

/// Rejects requests evaluated after their deadline.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestGuard;

impl RequestGuard {
    /// Passes when `now <= deadline`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Expired`] if `now > deadline`.
    ///
    /// ```
    /// use simple_swap::pool::RequestGuard;
    ///
    /// assert!(RequestGuard::check_deadline(100, 100).is_ok());
    /// assert!(RequestGuard::check_deadline(100, 101).is_err());
    /// ```
    pub fn check_deadline(deadline: Timestamp, now: Timestamp) -> Result<(), SwapError> {
        if now > deadline {
            return Err(SwapError::Expired { deadline, now });
        }
        Ok(())
    }
}
