//! # QC-18: Priority Whitelist Subsystem
//!
//! Computes the admission priority of transactions competing for a bounded
//! transaction set, from an allow-list of signer keys kept in the data
//! entries of a designated holder account.
//!
//! ## Architecture
//!
//! - **Domain**: Core entities (SignerFact, Hint, HintIndex, WhitelistSnapshot)
//! - **Algorithms**: Record parsing, priority resolution, reserve quota
//! - **Ports**: Inbound (PriorityWhitelistApi) and Outbound (SignatureVerifier,
//!   AccountDataProvider, LedgerInfoProvider)
//! - **Adapters**: Ed25519 verifier, in-memory account data, ledger tracker
//! - **Application**: Service owning the active snapshot
//!
//! ## Data Entry Format
//!
//! | Name | Value (big-endian) | Meaning |
//! |------|--------------------|---------|
//! | `reserve` | `i32` | Percent of each set kept for non-whitelisted txs, clamped to 1..=100 |
//! | `G...` account | `hint: i32` | Signer at `PRIORITY_MAX`, filed under `hint` |
//! | `G...` account | `hint: i32, priority: i32` | Signer at `priority`, filed under `hint` |
//!
//! Any other value length, or a name that is not an account key, drops that
//! one entry; the rest of the batch still loads.
//!
//! ## Resolution Order
//!
//! Signatures are checked in order against the keys filed under their hint;
//! the first verifying key decides the priority. Only if none verifies is the
//! holder key tried (`PRIORITY_MAX`). Otherwise the result is `PRIORITY_NONE`.

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::{Ed25519SignatureVerifier, InMemoryAccountData, TrackedLedger};
pub use application::{build_snapshot, PriorityWhitelistService};
pub use config::WhitelistConfig;
pub use domain::entities::*;
pub use domain::errors::{MalformedRecord, WhitelistError};
pub use domain::index::HintIndex;
pub use domain::snapshot::{SnapshotStats, WhitelistSnapshot};
pub use domain::value_objects::*;
pub use ports::inbound::{PriorityWhitelistApi, RefreshOutcome};
pub use ports::outbound::{
    AccountDataProvider, DataSourceError, LedgerInfoProvider, SignatureVerifier,
};
