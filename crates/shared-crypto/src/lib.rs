//! # Shared Crypto - Signing Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `signatures` | Ed25519 | Transaction signature verification |
//! | `strkey` | Base32 + CRC16 (StrKey) | Account identifiers in configuration data |
//!
//! ## Security Properties
//!
//! - **Ed25519**: Deterministic nonces, no RNG dependency
//! - Public keys are validated as curve points on construction, so a key that
//!   made it into a `Ed25519PublicKey` can never fail verification setup later
//! - Signature byte length is checked before verification; a truncated or
//!   padded signature is an error, never a silent "does not verify"

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod signatures;
pub mod strkey;

// Re-exports
pub use errors::CryptoError;
pub use signatures::{
    Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH,
};
pub use strkey::{decode_account_id, encode_account_id};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
