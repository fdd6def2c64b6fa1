//! # Account StrKey Encoding
//!
//! Account public keys travel as `G...` strings: a version byte, the 32-byte
//! Ed25519 key and a CRC16 checksum, base32 encoded. Configuration data names
//! its signers this way.

use crate::{CryptoError, Ed25519PublicKey};
use stellar_strkey::ed25519;

/// Decode a `G...` account identifier into a validated public key.
///
/// # Errors
/// * `CryptoError::InvalidStrKey` - wrong prefix, bad base32 or checksum
/// * `CryptoError::InvalidPublicKey` - the payload is not a curve point
pub fn decode_account_id(account_id: &str) -> Result<Ed25519PublicKey, CryptoError> {
    let decoded = ed25519::PublicKey::from_string(account_id)
        .map_err(|_| CryptoError::InvalidStrKey(account_id.to_string()))?;

    Ed25519PublicKey::from_bytes(decoded.0)
}

/// Encode a public key as a `G...` account identifier.
pub fn encode_account_id(public_key: &Ed25519PublicKey) -> String {
    ed25519::PublicKey(*public_key.as_bytes()).to_string()
}
