//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Bytes do not form a valid Ed25519 point
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Invalid signature length
    #[error("Invalid signature length: expected {expected}, got {actual}")]
    InvalidSignatureLength {
        /// Expected signature length in bytes
        expected: usize,
        /// Actual signature length in bytes
        actual: usize,
    },

    /// String is not a valid account StrKey
    #[error("Invalid account strkey: {0}")]
    InvalidStrKey(String),
}
