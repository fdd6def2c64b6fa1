//! # Inbound Ports (Driving Ports / API)
//!
//! Query surface used by transaction-set building, plus the refresh trigger.

use crate::domain::{DecoratedSignature, Hash, Priority, WhitelistError, WhitelistSnapshot};
use async_trait::async_trait;
use std::sync::Arc;

/// Result of a refresh attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A new snapshot was built and published.
    Rebuilt(crate::domain::SnapshotStats),
    /// No holder account is configured.
    SkippedNoHolder,
    /// The current snapshot is already up to date for this ledger.
    SkippedStale {
        /// Ledger the active snapshot was built at.
        built_at: u32,
        /// Ledger currently being built.
        current: u32,
    },
}

/// Primary Priority Whitelist API.
///
/// Implementations must be thread-safe (`Send + Sync`); queries never block
/// on a concurrent refresh.
#[async_trait]
pub trait PriorityWhitelistApi: Send + Sync {
    /// Rebuild the whitelist from the holder's data if the ledger advanced.
    async fn refresh(&self) -> Result<RefreshOutcome, WhitelistError>;

    /// Admission priority of a transaction.
    ///
    /// `PRIORITY_NONE` when no whitelisted signer (nor the holder) signed it.
    fn priority_of(
        &self,
        signatures: &[DecoratedSignature],
        tx_hash: &Hash,
    ) -> Result<Priority, WhitelistError>;

    /// Whether any whitelisted signer (or the holder) signed the transaction.
    fn is_whitelisted(
        &self,
        signatures: &[DecoratedSignature],
        tx_hash: &Hash,
    ) -> Result<bool, WhitelistError>;

    /// Slots of a candidate set reserved for non-whitelisted transactions.
    fn reserved_slot_count(&self, candidate_set_size: usize) -> usize;

    /// The active snapshot.
    fn snapshot(&self) -> Arc<WhitelistSnapshot>;
}
