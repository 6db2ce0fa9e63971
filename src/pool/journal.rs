//! All-or-nothing sequences of external transfers.
//!
//! A mutating pool operation may need several [`AssetLedger`] calls (two
//! debits for a deposit, two credits for a withdrawal, one of each for a
//! trade).  Each call is atomic on its own, but the sequence is not.  The
//! [`TransferJournal`] records every call that succeeded; if a later call
//! fails, [`TransferJournal::rollback`] replays the opposite transfer for
//! each recorded entry, newest first.
//!
//! A compensating transfer that itself fails is logged at `error` level
//! and skipped.  The original failure is still the one returned.

use tracing::{error, warn};

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::SwapError;
use crate::traits::AssetLedger;

/// Direction of a recorded transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Debit,
    Credit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    direction: Direction,
    asset: AssetId,
    account: AccountId,
    amount: Amount,
}

/// Journal of completed transfers against one ledger.
#[derive(Debug)]
pub struct TransferJournal<'l, L: AssetLedger + ?Sized> {
    ledger: &'l mut L,
    entries: Vec<Entry>,
}

impl<'l, L: AssetLedger + ?Sized> TransferJournal<'l, L> {
    /// Starts an empty journal.
    pub fn new(ledger: &'l mut L) -> Self {
        Self {
            ledger,
            entries: Vec::with_capacity(2),
        }
    }

    /// Pulls `amount` of `asset` from `from` into custody.
    ///
    /// On failure every earlier transfer is compensated before returning.
    ///
    /// # Errors
    ///
    /// [`SwapError::TransferFailed`] with the ledger's own error.
    pub fn debit(
        &mut self,
        asset: AssetId,
        from: AccountId,
        amount: Amount,
    ) -> Result<(), SwapError> {
        self.record(Entry {
            direction: Direction::Debit,
            asset,
            account: from,
            amount,
        })
    }

    /// Pays `amount` of `asset` from custody to `to`.
    ///
    /// On failure every earlier transfer is compensated before returning.
    ///
    /// # Errors
    ///
    /// [`SwapError::TransferFailed`] with the ledger's own error.
    pub fn credit(
        &mut self,
        asset: AssetId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), SwapError> {
        self.record(Entry {
            direction: Direction::Credit,
            asset,
            account: to,
            amount,
        })
    }

    /// Number of transfers recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if nothing has been transferred.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keeps every recorded transfer.
    pub fn commit(mut self) {
        self.entries.clear();
    }

    /// Reverses every recorded transfer, newest first.
    pub fn rollback(mut self) {
        self.compensate();
    }

    fn record(&mut self, entry: Entry) -> Result<(), SwapError> {
        // Zero-amount transfers are not forwarded to the ledger.
        if entry.amount.is_zero() {
            return Ok(());
        }
        let outcome = match entry.direction {
            Direction::Debit => self.ledger.debit(entry.asset, entry.account, entry.amount),
            Direction::Credit => self.ledger.credit(entry.asset, entry.account, entry.amount),
        };
        match outcome {
            Ok(()) => {
                self.entries.push(entry);
                Ok(())
            }
            Err(err) => {
                warn!(
                    direction = ?entry.direction,
                    asset = %entry.asset,
                    account = %entry.account,
                    amount = %entry.amount,
                    error = %err,
                    completed = self.entries.len(),
                    "transfer failed, rolling back"
                );
                self.compensate();
                Err(SwapError::TransferFailed(err))
            }
        }
    }

    fn compensate(&mut self) {
        while let Some(entry) = self.entries.pop() {
            let outcome = match entry.direction {
                Direction::Debit => self.ledger.credit(entry.asset, entry.account, entry.amount),
                Direction::Credit => self.ledger.debit(entry.asset, entry.account, entry.amount),
            };
            if let Err(err) = outcome {
                error!(
                    direction = ?entry.direction,
                    asset = %entry.asset,
                    account = %entry.account,
                    amount = %entry.amount,
                    error = %err,
                    "compensating transfer failed; ledger and pool may disagree"
                );
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::traits::TransferError;

    /// Records successful calls; fails the attempts listed in `fail_on`.
    #[derive(Debug, Default)]
    struct Recorder {
        calls: Vec<(Direction, u128)>,
        attempts: usize,
        fail_on: Vec<usize>,
    }

    impl Recorder {
        fn failing(fail_on: &[usize]) -> Self {
            Self {
                fail_on: fail_on.to_vec(),
                ..Self::default()
            }
        }

        fn step(&mut self, direction: Direction, amount: Amount) -> Result<(), TransferError> {
            let attempt = self.attempts;
            self.attempts += 1;
            if self.fail_on.contains(&attempt) {
                return Err(TransferError::Rejected(format!("attempt {attempt}")));
            }
            self.calls.push((direction, amount.get()));
            Ok(())
        }
    }

    impl AssetLedger for Recorder {
        fn debit(&mut self, _: AssetId, _: AccountId, amount: Amount) -> Result<(), TransferError> {
            self.step(Direction::Debit, amount)
        }

        fn credit(&mut self, _: AssetId, _: AccountId, amount: Amount) -> Result<(), TransferError> {
            self.step(Direction::Credit, amount)
        }
    }

    fn asset() -> AssetId {
        AssetId::from_bytes([1u8; 32])
    }

    #[test]
    fn commit_keeps_transfers() {
        let mut ledger = Recorder::default();
        let mut journal = TransferJournal::new(&mut ledger);
        let Ok(()) = journal.debit(asset(), AccountId::zero(), Amount::new(5)) else {
            panic!("debit");
        };
        let Ok(()) = journal.credit(asset(), AccountId::zero(), Amount::new(3)) else {
            panic!("credit");
        };
        assert_eq!(journal.len(), 2);
        journal.commit();
        assert_eq!(
            ledger.calls,
            vec![(Direction::Debit, 5), (Direction::Credit, 3)]
        );
    }

    #[test]
    fn failure_compensates_in_reverse() {
        let mut ledger = Recorder::failing(&[2]);
        let mut journal = TransferJournal::new(&mut ledger);
        assert!(journal.debit(asset(), AccountId::zero(), Amount::new(5)).is_ok());
        assert!(journal.debit(asset(), AccountId::zero(), Amount::new(7)).is_ok());
        let result = journal.credit(asset(), AccountId::zero(), Amount::new(3));
        assert!(matches!(result, Err(SwapError::TransferFailed(_))));
        assert!(journal.is_empty());
        assert_eq!(
            ledger.calls,
            vec![
                (Direction::Debit, 5),
                (Direction::Debit, 7),
                (Direction::Credit, 7),
                (Direction::Credit, 5),
            ]
        );
    }

    #[test]
    fn explicit_rollback() {
        let mut ledger = Recorder::default();
        let mut journal = TransferJournal::new(&mut ledger);
        assert!(journal.credit(asset(), AccountId::zero(), Amount::new(9)).is_ok());
        journal.rollback();
        assert_eq!(
            ledger.calls,
            vec![(Direction::Credit, 9), (Direction::Debit, 9)]
        );
    }

    #[test]
    fn failed_compensation_keeps_original_error() {
        // Attempt 1 is the credit, attempt 2 its compensation.
        let mut ledger = Recorder::failing(&[1, 2]);
        let mut journal = TransferJournal::new(&mut ledger);
        assert!(journal.debit(asset(), AccountId::zero(), Amount::new(5)).is_ok());
        let Err(SwapError::TransferFailed(TransferError::Rejected(reason))) =
            journal.credit(asset(), AccountId::zero(), Amount::new(3))
        else {
            panic!("expected TransferFailed");
        };
        assert_eq!(reason, "attempt 1");
        assert!(journal.is_empty());
        assert_eq!(ledger.calls, vec![(Direction::Debit, 5)]);
    }

    #[test]
    fn zero_amounts_skip_the_ledger() {
        let mut ledger = Recorder::default();
        let mut journal = TransferJournal::new(&mut ledger);
        assert!(journal.credit(asset(), AccountId::zero(), Amount::ZERO).is_ok());
        assert!(journal.is_empty());
        journal.commit();
        assert!(ledger.calls.is_empty());
    }
}
