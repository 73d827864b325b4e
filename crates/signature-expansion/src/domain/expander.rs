//! # Signature Expander
//!
//! Walks a key tree and resolves every signature pair whose prefix matches a
//! simple key into an [`ExpandedSignaturePair`].
//!
//! ## Rules
//!
//! - Every simple key is visited, in declaration order. Threshold values are
//!   never consulted, so no child is pruned because "enough" signatures were
//!   already found; the threshold evaluator needs the complete candidate set.
//! - Entering a key list or threshold key adds one level of depth. Going past
//!   `max_depth` fails the whole call with [`ExpansionError::KeyDepthExceeded`].
//! - Contract ids and legacy key material fail the whole call with
//!   [`ExpansionError::UnsupportedKeyType`].
//! - On failure nothing is returned: the accumulator is only handed back once
//!   the traversal has completed.
//!
//! Cost is bounded by `max_depth`, the number of children per level and the
//! number of pairs; there is no cross-call state.

use super::entities::{ExpandedPairSet, ExpandedSignaturePair};
use super::errors::ExpansionError;
use super::index::PrefixIndex;
use super::matcher::matches;
use shared_types::{Key, KeyList, SignatureMap, SimpleKey, ThresholdKey};

/// Where matching signature pairs are looked up.
enum Candidates<'a> {
    Linear(&'a SignatureMap),
    Indexed(&'a PrefixIndex<'a>),
}

impl Candidates<'_> {
    fn collect_into(&self, leaf: &SimpleKey, expanded: &mut ExpandedPairSet) {
        match self {
            Candidates::Linear(signatures) => {
                for pair in signatures.iter().filter(|pair| matches(leaf, pair)) {
                    expanded.insert(ExpandedSignaturePair::new(leaf, &pair.signature));
                }
            }
            Candidates::Indexed(index) => {
                for pair in index.candidates(leaf) {
                    expanded.insert(ExpandedSignaturePair::new(leaf, &pair.signature));
                }
            }
        }
    }
}

/// Depth-bounded signature expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureExpander {
    max_depth: usize,
}

impl SignatureExpander {
    /// Create an expander allowing `max_depth` levels of composite keys.
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Expand `signatures` against a single key.
    pub fn expand(
        &self,
        key: &Key,
        signatures: &SignatureMap,
    ) -> Result<ExpandedPairSet, ExpansionError> {
        self.expand_all(std::slice::from_ref(key), signatures)
    }

    /// Expand `signatures` against several keys into one set.
    ///
    /// Each key is its own root (depth 0). The first failure aborts the call.
    pub fn expand_all(
        &self,
        keys: &[Key],
        signatures: &SignatureMap,
    ) -> Result<ExpandedPairSet, ExpansionError> {
        self.run(keys, &Candidates::Linear(signatures))
    }

    /// Same result as [`expand_all`](Self::expand_all), matching through a
    /// prebuilt [`PrefixIndex`].
    pub fn expand_indexed(
        &self,
        keys: &[Key],
        index: &PrefixIndex<'_>,
    ) -> Result<ExpandedPairSet, ExpansionError> {
        self.run(keys, &Candidates::Indexed(index))
    }

    fn run(
        &self,
        keys: &[Key],
        candidates: &Candidates<'_>,
    ) -> Result<ExpandedPairSet, ExpansionError> {
        let mut expanded = ExpandedPairSet::new();
        for key in keys {
            self.expand_into(key, candidates, 0, &mut expanded)?;
        }
        Ok(expanded)
    }

    fn expand_into(
        &self,
        key: &Key,
        candidates: &Candidates<'_>,
        depth: usize,
        expanded: &mut ExpandedPairSet,
    ) -> Result<(), ExpansionError> {
        match key {
            Key::Simple(leaf) => {
                candidates.collect_into(leaf, expanded);
                Ok(())
            }
            Key::KeyList(KeyList { keys })
            | Key::Threshold(ThresholdKey {
                keys: KeyList { keys },
                ..
            }) => {
                let depth = depth + 1;
                if depth > self.max_depth {
                    return Err(ExpansionError::KeyDepthExceeded {
                        max_depth: self.max_depth,
                    });
                }

                for child in keys {
                    self.expand_into(child, candidates, depth, expanded)?;
                }
                Ok(())
            }
            Key::ContractId(_)
            | Key::DelegatableContractId(_)
            | Key::Rsa3072(_)
            | Key::EcdsaP384(_) => Err(ExpansionError::UnsupportedKeyType { kind: key.kind() }),
        }
    }
}

/// Expand pairs whose prefix is already a complete public key.
///
/// No key tree is involved: the prefix *is* the key. Used when the signing
/// key is not known in advance, e.g. to finalize an account created from an
/// ECDSA alias. ECDSA prefixes that are not a compressed SEC1 encoding are
/// skipped.
pub fn expand_full_prefixes(signatures: &SignatureMap) -> ExpandedPairSet {
    signatures
        .iter()
        .filter(|pair| pair.is_full_prefix())
        .filter_map(|pair| {
            SimpleKey::new(pair.algorithm, pair.prefix.clone())
                .ok()
                .map(|key| ExpandedSignaturePair::new(&key, &pair.signature))
        })
        .collect()
}
