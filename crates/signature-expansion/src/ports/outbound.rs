//! # Outbound Ports (Driven Ports / SPI)
//!
//! Collaborators that consume an expanded pair set. Both live outside this
//! subsystem; only their contracts are defined here.

use crate::domain::entities::{ExpandedPairSet, ExpandedSignaturePair};
use shared_types::Key;

/// Cryptographic verifier for expanded pairs.
///
/// Checks `pair.signature()` against the transaction digest using
/// `pair.public_key()` under `pair.algorithm()`.
pub trait CryptoVerifier: Send + Sync {
    /// Whether the signature is valid for the digest.
    fn verify(&self, pair: &ExpandedSignaturePair, digest: &[u8]) -> bool;
}

/// Threshold evaluator.
///
/// Given the original key tree and the *verified* pairs, decides whether
/// every key list and threshold key requirement is met.
pub trait ThresholdEvaluator: Send + Sync {
    /// Whether `key` is satisfied by `verified`.
    fn is_satisfied(&self, key: &Key, verified: &ExpandedPairSet) -> bool;
}
