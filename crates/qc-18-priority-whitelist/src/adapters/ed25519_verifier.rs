//! Ed25519 Signature Verifier Adapter
//!
//! Implements the `SignatureVerifier` port with shared-crypto's Ed25519
//! primitives. The signed message is the 32-byte transaction hash.

use crate::domain::{Hash, PublicKey};
use crate::ports::SignatureVerifier;
use shared_crypto::CryptoError;

/// Verifier backed by `ed25519-dalek`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519SignatureVerifier;

impl Ed25519SignatureVerifier {
    /// Create a new verifier.
    pub fn new() -> Self {
        Self
    }
}

impl SignatureVerifier for Ed25519SignatureVerifier {
    fn verify(
        &self,
        public_key: &PublicKey,
        signature: &[u8],
        message: &Hash,
    ) -> Result<bool, CryptoError> {
        public_key.verify_raw(message, signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_crypto::Ed25519KeyPair;

    #[test]
    fn test_verifies_own_signature() {
        let kp = Ed25519KeyPair::from_seed([1u8; 32]);
        let hash = [7u8; 32];
        let sig = kp.sign(&hash);

        let verifier = Ed25519SignatureVerifier::new();
        assert_eq!(
            verifier.verify(&kp.public_key(), sig.as_bytes(), &hash),
            Ok(true)
        );
    }

    #[test]
    fn test_other_key_is_false_not_error() {
        let kp = Ed25519KeyPair::from_seed([1u8; 32]);
        let other = Ed25519KeyPair::from_seed([2u8; 32]);
        let hash = [7u8; 32];
        let sig = kp.sign(&hash);

        let verifier = Ed25519SignatureVerifier::new();
        assert_eq!(
            verifier.verify(&other.public_key(), sig.as_bytes(), &hash),
            Ok(false)
        );
    }

    #[test]
    fn test_bad_length_is_error() {
        let kp = Ed25519KeyPair::from_seed([1u8; 32]);
        let verifier = Ed25519SignatureVerifier::new();

        let result = verifier.verify(&kp.public_key(), &[0u8; 32], &[0u8; 32]);
        assert!(matches!(
            result,
            Err(CryptoError::InvalidSignatureLength { actual: 32, .. })
        ));
    }
}
