//! # Prefix Matcher
//!
//! Decides whether a signature pair could belong to a simple key.
//!
//! A match is purely textual: the pair's prefix must equal the leading bytes
//! of the key. An empty prefix matches every key of the same algorithm; any
//! ambiguity this creates is settled by cryptographic verification later.

use shared_types::{SignaturePair, SimpleKey};

/// Whether `pair` names a prefix of `leaf`'s public key under the same
/// algorithm.
pub fn matches(leaf: &SimpleKey, pair: &SignaturePair) -> bool {
    if leaf.algorithm() != pair.algorithm {
        return false;
    }

    // `starts_with` is false for a prefix longer than the key
    leaf.public_key().starts_with(&pair.prefix)
}
