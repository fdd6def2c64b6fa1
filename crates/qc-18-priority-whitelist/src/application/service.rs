//! Priority Whitelist Service
//!
//! Main service implementing PriorityWhitelistApi.
//!
//! Owns the active snapshot handle. A refresh builds a complete snapshot
//! without holding any lock, then swaps the `Arc` in one short write. Queries
//! clone the `Arc` and evaluate against it lock-free, so they observe either
//! the old or the new whitelist, never a mix.

use crate::adapters::Ed25519SignatureVerifier;
use crate::algorithms::{is_whitelisted, parse_records, reserved_slots, resolve_priority};
use crate::config::WhitelistConfig;
use crate::domain::{
    ConfigRecord, DecoratedSignature, Hash, HintIndex, Priority, PublicKey, ReservePercentage,
    SnapshotStats, WhitelistError, WhitelistSnapshot,
};
use crate::ports::{
    AccountDataProvider, LedgerInfoProvider, PriorityWhitelistApi, RefreshOutcome,
    SignatureVerifier,
};
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_crypto::decode_account_id;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Build a snapshot from a full batch of records.
///
/// Pure: the same records always yield a snapshot that answers every query
/// identically.
pub fn build_snapshot(
    records: &[ConfigRecord],
    holder: Option<PublicKey>,
    default_reserve: ReservePercentage,
    built_at_ledger: u32,
) -> WhitelistSnapshot {
    let batch = parse_records(records, default_reserve);
    let rejected_count = batch.rejected.len();
    let index = HintIndex::build(batch.facts);

    let stats = SnapshotStats {
        signer_count: index.len(),
        bucket_count: index.bucket_count(),
        rejected_count,
    };

    WhitelistSnapshot {
        index,
        reserve: batch.reserve,
        holder,
        built_at_ledger,
        stats,
    }
}

/// Priority Whitelist Service
///
/// Refresh pipeline:
/// 1. Skip when no holder is configured
/// 2. Skip when the active snapshot already covers the current ledger
/// 3. Resolve the holder account key
/// 4. Load the holder's data entries
/// 5. Parse and index them into a new snapshot
/// 6. Publish the snapshot atomically
pub struct PriorityWhitelistService<D, L, V = Ed25519SignatureVerifier>
where
    D: AccountDataProvider,
    L: LedgerInfoProvider,
    V: SignatureVerifier,
{
    config: WhitelistConfig,
    data: Arc<D>,
    ledger: Arc<L>,
    verifier: V,
    active: RwLock<Arc<WhitelistSnapshot>>,
}

impl<D, L> PriorityWhitelistService<D, L, Ed25519SignatureVerifier>
where
    D: AccountDataProvider,
    L: LedgerInfoProvider,
{
    /// Create a service verifying with Ed25519.
    pub fn new(config: WhitelistConfig, data: Arc<D>, ledger: Arc<L>) -> Self {
        Self::with_verifier(config, data, ledger, Ed25519SignatureVerifier::new())
    }
}

impl<D, L, V> PriorityWhitelistService<D, L, V>
where
    D: AccountDataProvider,
    L: LedgerInfoProvider,
    V: SignatureVerifier,
{
    /// Create a service with a custom verification capability.
    pub fn with_verifier(config: WhitelistConfig, data: Arc<D>, ledger: Arc<L>, verifier: V) -> Self {
        let initial = WhitelistSnapshot::empty(config.default_reserve());
        Self {
            config,
            data,
            ledger,
            verifier,
            active: RwLock::new(Arc::new(initial)),
        }
    }

    /// Swap in `snapshot` unless a newer one is already active.
    fn publish(&self, snapshot: WhitelistSnapshot) -> Result<(), u32> {
        let snapshot = Arc::new(snapshot);
        let mut active = self.active.write();

        if active.built_at_ledger > snapshot.built_at_ledger {
            return Err(active.built_at_ledger);
        }

        *active = snapshot;
        Ok(())
    }

    fn resolve_holder(&self) -> Result<PublicKey, WhitelistError> {
        let account = self.config.holder_account.trim();
        decode_account_id(account)
            .map_err(|e| WhitelistError::InvalidHolder(format!("{account}: {e}")))
    }
}

#[async_trait]
impl<D, L, V> PriorityWhitelistApi for PriorityWhitelistService<D, L, V>
where
    D: AccountDataProvider,
    L: LedgerInfoProvider,
    V: SignatureVerifier,
{
    async fn refresh(&self) -> Result<RefreshOutcome, WhitelistError> {
        // 1. Whitelist disabled
        if !self.config.has_holder() {
            debug!("[qc-18] No whitelist holder configured, skipping refresh");
            return Ok(RefreshOutcome::SkippedNoHolder);
        }

        // 2. Already built for this ledger
        let current = self.ledger.current_ledger_num();
        let built_at = self.active.read().built_at_ledger;
        if built_at >= current {
            debug!(built_at, current, "[qc-18] Whitelist up to date, skipping refresh");
            return Ok(RefreshOutcome::SkippedStale { built_at, current });
        }

        // 3. Holder key
        let holder = self.resolve_holder()?;

        // 4. Load entries; on failure the active snapshot stays in place
        let records = self
            .data
            .load_account_data(&holder)
            .await
            .map_err(|e| WhitelistError::DataSource(e.to_string()))?;

        // 5. Build
        let snapshot = build_snapshot(&records, Some(holder), self.config.default_reserve(), current);
        let stats = snapshot.stats;
        let reserve = snapshot.reserve.percent();

        // 6. Publish
        if let Err(newer) = self.publish(snapshot) {
            warn!(
                newer,
                current, "[qc-18] Discarding rebuilt whitelist, a newer one is active"
            );
            return Ok(RefreshOutcome::SkippedStale {
                built_at: newer,
                current,
            });
        }

        info!(
            signers = stats.signer_count,
            buckets = stats.bucket_count,
            rejected = stats.rejected_count,
            reserve_percent = reserve,
            ledger = current,
            "[qc-18] Whitelist rebuilt"
        );

        Ok(RefreshOutcome::Rebuilt(stats))
    }

    fn priority_of(
        &self,
        signatures: &[DecoratedSignature],
        tx_hash: &Hash,
    ) -> Result<Priority, WhitelistError> {
        let snapshot = self.snapshot();
        let priority = resolve_priority(
            signatures,
            tx_hash,
            &snapshot.index,
            snapshot.holder.as_ref(),
            &self.verifier,
        )?;

        debug!(
            priority,
            signatures = signatures.len(),
            "[qc-18] Resolved transaction priority"
        );
        Ok(priority)
    }

    fn is_whitelisted(
        &self,
        signatures: &[DecoratedSignature],
        tx_hash: &Hash,
    ) -> Result<bool, WhitelistError> {
        let snapshot = self.snapshot();
        is_whitelisted(
            signatures,
            tx_hash,
            &snapshot.index,
            snapshot.holder.as_ref(),
            &self.verifier,
        )
    }

    fn reserved_slot_count(&self, candidate_set_size: usize) -> usize {
        reserved_slots(candidate_set_size, self.snapshot().reserve)
    }

    fn snapshot(&self) -> Arc<WhitelistSnapshot> {
        self.active.read().clone()
    }
}
