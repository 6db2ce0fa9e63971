//! Mutual exclusion for mutating pool operations.
//!
//! A [`ReentrancyGuard`] is a [`ReentrantMutex`] around an "entered"
//! flag.  [`ReentrancyGuard::enter`] locks it and sets the flag, returning
//! an [`Entered`] token that clears the flag and unlocks on drop, so the
//! guard is released on every exit path, including `?` and panics.
//!
//! - Another thread calling [`ReentrancyGuard::enter`] blocks until the
//!   current operation finishes, so mutations run one at a time.
//! - A nested call on the same thread (an
//!   [`AssetLedger`](crate::traits::AssetLedger) calling back into the
//!   pool) re-acquires the reentrant lock, finds the flag set and fails
//!   with [`SwapError::Reentrant`] instead of deadlocking.

use std::cell::Cell;

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};

use crate::error::SwapError;

/// Lock held for the duration of a mutating operation.
#[derive(Debug, Default)]
pub struct ReentrancyGuard {
    lock: ReentrantMutex<Cell<bool>>,
}

impl ReentrancyGuard {
    /// Creates a released guard.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lock: ReentrantMutex::new(Cell::new(false)),
        }
    }

    /// Takes the guard, waiting for an operation on another thread to
    /// finish first.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Reentrant`] if the calling thread already
    /// holds the guard.
    pub fn enter(&self) -> Result<Entered<'_>, SwapError> {
        let held = self.lock.lock();
        if held.replace(true) {
            return Err(SwapError::Reentrant);
        }
        Ok(Entered { held })
    }

    /// `true` while some operation holds the guard.
    #[must_use]
    pub fn is_entered(&self) -> bool {
        self.lock.is_locked()
    }
}

/// Proof of holding a [`ReentrancyGuard`]; releases it on drop.
#[derive(Debug)]
#[must_use = "the guard is released as soon as this token is dropped"]
pub struct Entered<'a> {
    held: ReentrantMutexGuard<'a, Cell<bool>>,
}

impl Drop for Entered<'_> {
    fn drop(&mut self) {
        self.held.set(false);
    }
}
