//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that transaction-set building uses
//! - **Outbound (Driven)**: Dependencies this subsystem needs

pub mod inbound;
pub mod outbound;

pub use inbound::{PriorityWhitelistApi, RefreshOutcome};
pub use outbound::{AccountDataProvider, DataSourceError, LedgerInfoProvider, SignatureVerifier};
