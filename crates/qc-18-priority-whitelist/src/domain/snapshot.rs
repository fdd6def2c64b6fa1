//! Immutable whitelist snapshot.
//!
//! A snapshot pairs an index with its reserve percentage and the holder key
//! it was built for. Readers share it through an `Arc`; a refresh replaces
//! the whole snapshot, never a field of it.

use super::entities::PublicKey;
use super::index::HintIndex;
use super::value_objects::ReservePercentage;
use serde::Serialize;

/// Counters describing a built snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SnapshotStats {
    /// Signer facts indexed, duplicates included.
    pub signer_count: usize,
    /// Distinct hints.
    pub bucket_count: usize,
    /// Records dropped as malformed.
    pub rejected_count: usize,
}

/// One generation of the whitelist.
#[derive(Clone, Debug, Default)]
pub struct WhitelistSnapshot {
    /// Signer facts by hint.
    pub index: HintIndex,
    /// Share reserved for non-whitelisted transactions.
    pub reserve: ReservePercentage,
    /// Holder account key. Implicitly carries `PRIORITY_MAX`.
    pub holder: Option<PublicKey>,
    /// Ledger being built when the snapshot was taken; 0 for the initial one.
    pub built_at_ledger: u32,
    /// Build counters.
    pub stats: SnapshotStats,
}

impl WhitelistSnapshot {
    /// Empty snapshot used before the first successful refresh.
    pub fn empty(reserve: ReservePercentage) -> Self {
        Self {
            reserve,
            ..Default::default()
        }
    }
}
