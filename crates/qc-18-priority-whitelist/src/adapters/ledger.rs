//! Ledger Position Adapter
//!
//! `LedgerInfoProvider` fed by whoever closes ledgers. The ledger being built
//! is always one past the last closed ledger.

use crate::ports::LedgerInfoProvider;
use std::sync::atomic::{AtomicU32, Ordering};

/// Ledger position updated on every ledger close.
#[derive(Debug, Default)]
pub struct TrackedLedger {
    last_closed: AtomicU32,
}

impl TrackedLedger {
    /// Start at `last_closed`.
    pub fn new(last_closed: u32) -> Self {
        Self {
            last_closed: AtomicU32::new(last_closed),
        }
    }

    /// Record that `ledger_num` closed.
    pub fn ledger_closed(&self, ledger_num: u32) {
        self.last_closed.fetch_max(ledger_num, Ordering::AcqRel);
    }

    /// Sequence number of the last closed ledger.
    pub fn last_closed(&self) -> u32 {
        self.last_closed.load(Ordering::Acquire)
    }
}

impl LedgerInfoProvider for TrackedLedger {
    fn current_ledger_num(&self) -> u32 {
        self.last_closed().saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_is_one_past_last_closed() {
        let ledger = TrackedLedger::new(10);
        assert_eq!(ledger.last_closed(), 10);
        assert_eq!(ledger.current_ledger_num(), 11);
    }

    #[test]
    fn test_never_moves_backwards() {
        let ledger = TrackedLedger::new(10);
        ledger.ledger_closed(12);
        ledger.ledger_closed(11);

        assert_eq!(ledger.last_closed(), 12);
    }
}
