//! Error types for the priority whitelist.

use shared_crypto::CryptoError;
use thiserror::Error;

/// Errors surfaced by whitelist queries and refreshes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WhitelistError {
    /// The verification capability rejected key or signature material.
    ///
    /// Distinct from "does not verify": this means the input is corrupted.
    #[error("Signature verification failed on malformed input: {0}")]
    Verification(#[from] CryptoError),

    /// The configured holder account identifier is not a valid account key.
    #[error("Invalid holder account: {0}")]
    InvalidHolder(String),

    /// Loading the holder's data entries failed.
    #[error("Account data source failed: {0}")]
    DataSource(String),
}

/// Why a single configuration record was dropped.
///
/// Never fatal to a rebuild.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MalformedRecord {
    /// Value is neither 4 nor 8 bytes long.
    #[error("bad value length: {len} (expected 4 or 8)")]
    BadValueLength { len: usize },

    /// Name is not an account identifier of a valid public key.
    #[error("bad public key")]
    InvalidPublicKey,

    /// Explicit priority is zero or negative.
    #[error("non-positive priority: {priority}")]
    NonPositivePriority { priority: i32 },
}
