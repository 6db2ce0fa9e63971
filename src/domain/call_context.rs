//! Caller identity and evaluation time of a single request.

use std::time::{SystemTime, UNIX_EPOCH};

use super::AccountId;

/// Unix timestamp in seconds.
pub type Timestamp = u64;

/// Who is calling and what time it is, for one pool operation.
///
/// The pool never reads a clock on its own; "now" is always supplied by
/// the caller so that expiry is a deterministic point-in-time check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallContext {
    caller: AccountId,
    now: Timestamp,
}

impl CallContext {
    /// Creates a context evaluated at `now`.
    #[must_use]
    pub const fn new(caller: AccountId, now: Timestamp) -> Self {
        Self { caller, now }
    }

    /// Creates a context stamped with the current wall-clock time.
    ///
    /// A clock set before 1970 is treated as time zero.
    #[must_use]
    pub fn at_system_time(caller: AccountId) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self { caller, now }
    }

    /// The party whose assets are debited.
    #[must_use]
    pub const fn caller(&self) -> AccountId {
        self.caller
    }

    /// The evaluation time.
    #[must_use]
    pub const fn now(&self) -> Timestamp {
        self.now
    }
}
