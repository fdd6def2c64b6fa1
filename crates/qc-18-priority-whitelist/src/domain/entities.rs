//! Core entities for the priority whitelist.
//!
//! ## Data Types
//!
//! - Hash: `[u8; 32]` (transaction hash, the message that signers sign)
//! - PublicKey: validated Ed25519 key from shared-crypto
//! - Hint: 4 big-endian bytes read as a signed 32-bit integer

use serde::{Deserialize, Serialize};
use shared_crypto::{encode_account_id, Ed25519PublicKey};

/// Transaction hash.
pub type Hash = [u8; 32];

/// Signer public key.
pub type PublicKey = Ed25519PublicKey;

/// Admission priority of a transaction. Higher admits first.
pub type Priority = i32;

/// Priority of the holder account, and of signer records without an
/// explicit priority.
pub const PRIORITY_MAX: Priority = i32::MAX;

/// Priority of a transaction that no whitelisted signer signed.
pub const PRIORITY_NONE: Priority = 0;

/// Length in bytes of a signature hint.
pub const HINT_LENGTH: usize = 4;

/// Filter value narrowing which keys a signature is tested against.
///
/// Collisions are expected: a hint selects candidates, it never identifies
/// a signer on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hint(pub i32);

impl Hint {
    /// Interpret four bytes as a big-endian 32-bit integer.
    pub fn from_be_bytes(bytes: [u8; HINT_LENGTH]) -> Self {
        Self(i32::from_be_bytes(bytes))
    }

    /// Hint that signatures made by `key` carry (its last four bytes).
    pub fn from_public_key(key: &PublicKey) -> Self {
        Self::from_be_bytes(key.signature_hint())
    }

    /// Big-endian byte form.
    pub fn to_be_bytes(self) -> [u8; HINT_LENGTH] {
        self.0.to_be_bytes()
    }
}

/// One allow-listed signer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignerFact {
    /// Key the signer signs with.
    pub public_key: PublicKey,
    /// Priority granted to transactions it signs.
    pub priority: Priority,
}

impl SignerFact {
    /// Creates a new signer fact.
    pub fn new(public_key: PublicKey, priority: Priority) -> Self {
        Self {
            public_key,
            priority,
        }
    }
}

/// A transaction signature together with the hint of its signer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoratedSignature {
    /// Last four bytes of the signer's key, as claimed by the submitter.
    pub hint: [u8; HINT_LENGTH],
    /// Raw signature bytes over the transaction hash.
    pub signature: Vec<u8>,
}

impl DecoratedSignature {
    /// Creates a decorated signature.
    pub fn new(hint: [u8; HINT_LENGTH], signature: Vec<u8>) -> Self {
        Self { hint, signature }
    }

    /// The hint as an index key.
    pub fn hint(&self) -> Hint {
        Hint::from_be_bytes(self.hint)
    }
}

/// A raw name/value data entry attached to the holder account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRecord {
    /// Entry name: `"reserve"` or a signer's account identifier.
    pub name: String,
    /// Entry value, 4 or 8 bytes when well formed.
    pub value: Vec<u8>,
}

impl ConfigRecord {
    /// Creates a record from raw parts.
    pub fn new(name: impl Into<String>, value: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// A `"reserve"` record carrying a raw (unclamped) percentage.
    pub fn reserve(percent: i32) -> Self {
        Self::new(
            crate::domain::RESERVE_RECORD_NAME,
            percent.to_be_bytes().to_vec(),
        )
    }

    /// A signer record indexed under `hint`. Without `priority` the signer
    /// is granted `PRIORITY_MAX`.
    pub fn signer(key: &PublicKey, hint: Hint, priority: Option<Priority>) -> Self {
        let mut value = hint.to_be_bytes().to_vec();
        if let Some(priority) = priority {
            value.extend_from_slice(&priority.to_be_bytes());
        }
        Self::new(encode_account_id(key), value)
    }
}
