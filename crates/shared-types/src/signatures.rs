//! # Signature Pairs
//!
//! Signatures attached to a transaction, as decoded from its signature map.
//!
//! A pair names an algorithm and a *prefix* of the public key it claims to
//! sign for. The prefix may be empty, partial, or the full key; resolving it
//! to concrete keys is the job of signature expansion.

use crate::keys::KeyAlgorithm;
use serde::{Deserialize, Serialize};

/// One signature supplied with a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignaturePair {
    /// Algorithm the signature was produced with.
    pub algorithm: KeyAlgorithm,
    /// Leading bytes of the signing public key (possibly empty).
    pub prefix: Vec<u8>,
    /// Raw signature bytes.
    pub signature: Vec<u8>,
}

impl SignaturePair {
    /// Create a signature pair.
    pub fn new(algorithm: KeyAlgorithm, prefix: Vec<u8>, signature: Vec<u8>) -> Self {
        Self {
            algorithm,
            prefix,
            signature,
        }
    }

    /// Whether the prefix is a complete public key for its algorithm.
    pub fn is_full_prefix(&self) -> bool {
        self.prefix.len() == self.algorithm.key_length()
    }
}

/// The signature pairs of one transaction, in wire order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureMap {
    /// Pairs in the order they were supplied.
    pub pairs: Vec<SignaturePair>,
}

impl SignatureMap {
    /// Create a signature map.
    pub fn new(pairs: Vec<SignaturePair>) -> Self {
        Self { pairs }
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no signatures were supplied.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the pairs.
    pub fn iter(&self) -> std::slice::Iter<'_, SignaturePair> {
        self.pairs.iter()
    }
}

impl FromIterator<SignaturePair> for SignatureMap {
    fn from_iter<I: IntoIterator<Item = SignaturePair>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SignatureMap {
    type Item = SignaturePair;
    type IntoIter = std::vec::IntoIter<SignaturePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'a> IntoIterator for &'a SignatureMap {
    type Item = &'a SignaturePair;
    type IntoIter = std::slice::Iter<'a, SignaturePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
