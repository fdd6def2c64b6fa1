//! Priority Resolution
//!
//! Finds the admission priority of a transaction from its signatures.
//!
//! Only keys filed under a signature's hint are tested, so the cost is
//! proportional to the bucket sizes (expected 1) instead of the allow-list.
//!
//! ## Ordering
//!
//! The result is the priority of the first signature, in input order, that
//! verifies against any candidate in its bucket, in bucket order. The holder
//! key is tried only once every signature missed its bucket.

use crate::domain::{
    DecoratedSignature, Hash, HintIndex, Priority, PublicKey, WhitelistError, PRIORITY_MAX,
    PRIORITY_NONE,
};
use crate::ports::SignatureVerifier;

/// Resolve the priority of a transaction.
///
/// # Errors
/// * `WhitelistError::Verification` - the verifier rejected the material
///   (corrupted key or signature length); never returned for a plain miss
pub fn resolve_priority<V>(
    signatures: &[DecoratedSignature],
    tx_hash: &Hash,
    index: &HintIndex,
    holder: Option<&PublicKey>,
    verifier: &V,
) -> Result<Priority, WhitelistError>
where
    V: SignatureVerifier + ?Sized,
{
    for sig in signatures {
        for candidate in index.lookup(sig.hint()) {
            if verifier.verify(&candidate.public_key, &sig.signature, tx_hash)? {
                return Ok(candidate.priority);
            }
        }
    }

    if let Some(holder) = holder {
        for sig in signatures {
            if verifier.verify(holder, &sig.signature, tx_hash)? {
                return Ok(PRIORITY_MAX);
            }
        }
    }

    Ok(PRIORITY_NONE)
}

/// Whether the transaction resolves to any priority at all.
pub fn is_whitelisted<V>(
    signatures: &[DecoratedSignature],
    tx_hash: &Hash,
    index: &HintIndex,
    holder: Option<&PublicKey>,
    verifier: &V,
) -> Result<bool, WhitelistError>
where
    V: SignatureVerifier + ?Sized,
{
    resolve_priority(signatures, tx_hash, index, holder, verifier).map(|p| p != PRIORITY_NONE)
}
