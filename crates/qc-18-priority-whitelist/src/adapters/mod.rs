//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits.

mod account_data;
mod ed25519_verifier;
mod ledger;

pub use account_data::InMemoryAccountData;
pub use ed25519_verifier::Ed25519SignatureVerifier;
pub use ledger::TrackedLedger;
