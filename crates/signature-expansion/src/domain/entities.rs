//! # Domain Entities
//!
//! Output of signature expansion: each signature pair resolved to a full
//! public key, collected into a deduplicating set.

use super::ecdsa::{evm_alias, EvmAlias};
use shared_types::{Key, KeyAlgorithm, SignatureMap, SimpleKey};
use std::collections::hash_set;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

// =============================================================================
// EXPANDED SIGNATURE PAIR
// =============================================================================

/// A signature pair resolved to the full public key it may have signed for.
///
/// Identity is the triple `(algorithm, public_key, signature)`. The EVM alias
/// is derived from the key and takes no part in equality or hashing.
#[derive(Clone, Debug)]
pub struct ExpandedSignaturePair {
    algorithm: KeyAlgorithm,
    public_key: Vec<u8>,
    signature: Vec<u8>,
    evm_alias: Option<EvmAlias>,
}

impl ExpandedSignaturePair {
    /// Resolve `signature` against a simple key.
    pub fn new(key: &SimpleKey, signature: &[u8]) -> Self {
        let evm_alias = match key.algorithm() {
            KeyAlgorithm::EcdsaSecp256k1 => evm_alias(key.public_key()),
            KeyAlgorithm::Ed25519 => None,
        };

        Self {
            algorithm: key.algorithm(),
            public_key: key.public_key().to_vec(),
            signature: signature.to_vec(),
            evm_alias,
        }
    }

    pub fn algorithm(&self) -> KeyAlgorithm {
        self.algorithm
    }

    /// Full public key bytes.
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// EVM alias of an ECDSA key that decompresses to a valid curve point.
    pub fn evm_alias(&self) -> Option<&EvmAlias> {
        self.evm_alias.as_ref()
    }
}

impl PartialEq for ExpandedSignaturePair {
    fn eq(&self, other: &Self) -> bool {
        self.algorithm == other.algorithm
            && self.public_key == other.public_key
            && self.signature == other.signature
    }
}

impl Eq for ExpandedSignaturePair {}

impl Hash for ExpandedSignaturePair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.algorithm.hash(state);
        self.public_key.hash(state);
        self.signature.hash(state);
    }
}

// =============================================================================
// EXPANDED PAIR SET
// =============================================================================

/// Deduplicating set of expanded pairs.
///
/// Iteration order is unspecified. Compare sets, never sequences.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpandedPairSet {
    pairs: HashSet<ExpandedSignaturePair>,
}

impl ExpandedPairSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair. Returns `false` if an equal pair was already present.
    pub fn insert(&mut self, pair: ExpandedSignaturePair) -> bool {
        self.pairs.insert(pair)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn contains(&self, pair: &ExpandedSignaturePair) -> bool {
        self.pairs.contains(pair)
    }

    pub fn iter(&self) -> hash_set::Iter<'_, ExpandedSignaturePair> {
        self.pairs.iter()
    }

    /// Distinct public keys that at least one pair resolved to.
    pub fn public_keys(&self) -> HashSet<(KeyAlgorithm, &[u8])> {
        self.pairs
            .iter()
            .map(|pair| (pair.algorithm, pair.public_key.as_slice()))
            .collect()
    }

    /// Whether some pair resolved to exactly this simple key.
    pub fn has_key(&self, key: &SimpleKey) -> bool {
        self.pairs
            .iter()
            .any(|pair| pair.algorithm == key.algorithm() && pair.public_key == key.public_key())
    }
}

impl Extend<ExpandedSignaturePair> for ExpandedPairSet {
    fn extend<I: IntoIterator<Item = ExpandedSignaturePair>>(&mut self, iter: I) {
        self.pairs.extend(iter);
    }
}

impl FromIterator<ExpandedSignaturePair> for ExpandedPairSet {
    fn from_iter<I: IntoIterator<Item = ExpandedSignaturePair>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ExpandedPairSet {
    type Item = ExpandedSignaturePair;
    type IntoIter = hash_set::IntoIter<ExpandedSignaturePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'a> IntoIterator for &'a ExpandedPairSet {
    type Item = &'a ExpandedSignaturePair;
    type IntoIter = hash_set::Iter<'a, ExpandedSignaturePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

// =============================================================================
// REQUESTS
// =============================================================================

/// The keys one transaction must satisfy and the signatures it carries.
#[derive(Clone, Debug, Default)]
pub struct ExpansionRequest {
    /// Required keys, expanded into one set.
    pub keys: Vec<Key>,
    /// Signature pairs supplied with the transaction.
    pub signatures: SignatureMap,
}

impl ExpansionRequest {
    pub fn new(keys: Vec<Key>, signatures: SignatureMap) -> Self {
        Self { keys, signatures }
    }
}
