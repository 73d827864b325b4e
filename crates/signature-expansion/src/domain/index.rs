//! # Prefix Index
//!
//! Lookup structure for signature maps with many pairs.
//!
//! Pairs are grouped by algorithm, then by exact prefix bytes. A key is
//! matched by probing once per distinct prefix length not longer than the
//! key, instead of comparing against every pair. The set of matches is
//! exactly what [`matches`](super::matcher::matches) accepts.

use shared_types::{KeyAlgorithm, SignatureMap, SignaturePair, SimpleKey};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Default)]
struct AlgorithmIndex {
    /// Distinct prefix lengths, ascending.
    lengths: BTreeSet<usize>,
    /// Prefix bytes to positions in the signature map.
    by_prefix: HashMap<Vec<u8>, Vec<usize>>,
}

/// Signature pairs indexed by algorithm and prefix.
#[derive(Debug)]
pub struct PrefixIndex<'a> {
    pairs: &'a [SignaturePair],
    by_algorithm: HashMap<KeyAlgorithm, AlgorithmIndex>,
}

impl<'a> PrefixIndex<'a> {
    /// Index every pair of a signature map.
    pub fn build(signatures: &'a SignatureMap) -> Self {
        let mut by_algorithm: HashMap<KeyAlgorithm, AlgorithmIndex> = HashMap::new();

        for (position, pair) in signatures.iter().enumerate() {
            let index = by_algorithm.entry(pair.algorithm).or_default();
            index.lengths.insert(pair.prefix.len());
            index
                .by_prefix
                .entry(pair.prefix.clone())
                .or_default()
                .push(position);
        }

        Self {
            pairs: &signatures.pairs,
            by_algorithm,
        }
    }

    /// Number of indexed pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Every pair whose prefix matches `key`, in no particular order.
    pub fn candidates<'s>(
        &'s self,
        key: &'s SimpleKey,
    ) -> impl Iterator<Item = &'a SignaturePair> + 's {
        let pairs = self.pairs;
        let bytes = key.public_key();

        self.by_algorithm
            .get(&key.algorithm())
            .into_iter()
            .flat_map(move |index| {
                index
                    .lengths
                    .iter()
                    .take_while(move |&&len| len <= bytes.len())
                    .filter_map(move |&len| index.by_prefix.get(&bytes[..len]))
                    .flatten()
                    .map(move |&position| &pairs[position])
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::matcher::matches;

    fn ed_pair(prefix: &[u8], sig: u8) -> SignaturePair {
        SignaturePair::new(KeyAlgorithm::Ed25519, prefix.to_vec(), vec![sig])
    }

    fn sorted_sigs<'a>(iter: impl Iterator<Item = &'a SignaturePair>) -> Vec<u8> {
        let mut sigs: Vec<u8> = iter.map(|p| p.signature[0]).collect();
        sigs.sort_unstable();
        sigs
    }

    #[test]
    fn test_candidates_cover_every_prefix_length() {
        let mut key_bytes = [0u8; 32];
        key_bytes[..4].copy_from_slice(&[1, 2, 3, 4]);
        let key = SimpleKey::ed25519(key_bytes);

        let map = SignatureMap::new(vec![
            ed_pair(&[], 0),
            ed_pair(&[1], 1),
            ed_pair(&[1, 2, 3], 2),
            ed_pair(&[1, 2, 4], 3),
            ed_pair(&key_bytes, 4),
            ed_pair(&[9], 5),
        ]);
        let index = PrefixIndex::build(&map);

        assert_eq!(index.len(), 6);
        assert_eq!(sorted_sigs(index.candidates(&key)), vec![0, 1, 2, 4]);
    }

    #[test]
    fn test_duplicate_prefixes_all_returned() {
        let key = SimpleKey::ed25519([7; 32]);
        let map = SignatureMap::new(vec![ed_pair(&[7, 7], 1), ed_pair(&[7, 7], 2)]);
        let index = PrefixIndex::build(&map);

        assert_eq!(sorted_sigs(index.candidates(&key)), vec![1, 2]);
    }

    #[test]
    fn test_other_algorithm_not_returned() {
        let key = SimpleKey::ed25519([2; 32]);
        let map = SignatureMap::new(vec![SignaturePair::new(
            KeyAlgorithm::EcdsaSecp256k1,
            vec![2],
            vec![1],
        )]);
        let index = PrefixIndex::build(&map);

        assert_eq!(index.candidates(&key).count(), 0);
    }

    #[test]
    fn test_overlong_prefix_not_returned() {
        let key = SimpleKey::ed25519([5; 32]);
        let map = SignatureMap::new(vec![ed_pair(&[5; 33], 1)]);
        let index = PrefixIndex::build(&map);

        assert_eq!(index.candidates(&key).count(), 0);
    }

    #[test]
    fn test_agrees_with_linear_matcher() {
        let keys: Vec<SimpleKey> = (0u8..8).map(|i| SimpleKey::ed25519([i % 3; 32])).collect();
        let map = SignatureMap::new(
            (0u8..12)
                .map(|i| ed_pair(&vec![i % 3; (i % 4) as usize], i))
                .collect(),
        );
        let index = PrefixIndex::build(&map);

        for key in &keys {
            let linear = sorted_sigs(map.iter().filter(|p| matches(key, p)));
            assert_eq!(sorted_sigs(index.candidates(key)), linear);
        }
    }

    #[test]
    fn test_empty_map() {
        let map = SignatureMap::default();
        let index = PrefixIndex::build(&map);

        assert!(index.is_empty());
        assert_eq!(index.candidates(&SimpleKey::ed25519([0; 32])).count(), 0);
    }
}
