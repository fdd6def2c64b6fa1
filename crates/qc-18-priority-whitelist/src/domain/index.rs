//! Hint-bucketed signer index.
//!
//! A multi-valued map: each hint owns the list of every signer fact filed
//! under it, in insertion order. Same-hint entries never overwrite each
//! other, and exact duplicates from the source data are kept as-is.

use super::entities::{Hint, SignerFact};
use std::collections::HashMap;

/// Immutable signer index keyed by hint.
///
/// Built in one pass from parsed facts and replaced wholesale on refresh.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HintIndex {
    buckets: HashMap<Hint, Vec<SignerFact>>,
    signer_count: usize,
}

impl HintIndex {
    /// Build an index from `(hint, fact)` pairs, preserving input order
    /// within each bucket.
    pub fn build<I>(facts: I) -> Self
    where
        I: IntoIterator<Item = (Hint, SignerFact)>,
    {
        let mut buckets: HashMap<Hint, Vec<SignerFact>> = HashMap::new();
        let mut signer_count = 0;

        for (hint, fact) in facts {
            buckets.entry(hint).or_default().push(fact);
            signer_count += 1;
        }

        Self {
            buckets,
            signer_count,
        }
    }

    /// Candidates filed under `hint`; empty for unknown hints.
    pub fn lookup(&self, hint: Hint) -> &[SignerFact] {
        self.buckets.get(&hint).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of facts, duplicates included.
    pub fn len(&self) -> usize {
        self.signer_count
    }

    /// Whether the index holds no facts.
    pub fn is_empty(&self) -> bool {
        self.signer_count == 0
    }

    /// Number of distinct hints.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PRIORITY_MAX;
    use shared_crypto::Ed25519KeyPair;

    fn fact(seed: u8, priority: i32) -> SignerFact {
        let key = Ed25519KeyPair::from_seed([seed; 32]).public_key();
        SignerFact::new(key, priority)
    }

    #[test]
    fn test_lookup_unknown_hint_is_empty() {
        let index = HintIndex::build(vec![(Hint(1), fact(1, 10))]);
        assert!(index.lookup(Hint(2)).is_empty());
    }

    #[test]
    fn test_empty_index() {
        let index = HintIndex::default();
        assert!(index.is_empty());
        assert_eq!(index.bucket_count(), 0);
        assert!(index.lookup(Hint(0)).is_empty());
    }

    #[test]
    fn test_colliding_hints_share_bucket_in_order() {
        let a = fact(1, 10);
        let b = fact(2, 20);
        let index = HintIndex::build(vec![(Hint(9), a), (Hint(9), b)]);

        assert_eq!(index.lookup(Hint(9)), &[a, b]);
        assert_eq!(index.bucket_count(), 1);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_duplicates_preserved() {
        let a = fact(1, PRIORITY_MAX);
        let index = HintIndex::build(vec![(Hint(3), a), (Hint(3), a)]);

        assert_eq!(index.lookup(Hint(3)).len(), 2);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_build_is_deterministic() {
        let pairs = vec![
            (Hint(1), fact(1, 1)),
            (Hint(2), fact(2, 2)),
            (Hint(1), fact(3, 3)),
        ];

        let first = HintIndex::build(pairs.clone());
        let second = HintIndex::build(pairs);

        assert_eq!(first, second);
    }
}
