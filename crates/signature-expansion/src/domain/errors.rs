//! # Expansion Errors
//!
//! Both variants are terminal for the expansion call: the transaction cannot
//! be authorized and the caller must not retry. Malformed thresholds, empty
//! key lists and empty signature maps are not errors; they only shrink the
//! result.

use thiserror::Error;

/// Errors that can occur while expanding signature pairs against a key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExpansionError {
    /// The key tree contains a variant that cannot be matched against
    /// signature pairs (contract ids, legacy RSA/P-384 material).
    #[error("Unsupported key type: {kind}")]
    UnsupportedKeyType { kind: &'static str },

    /// Composite keys are nested deeper than the configured maximum.
    #[error("Key depth exceeded: nesting is limited to {max_depth} levels")]
    KeyDepthExceeded { max_depth: usize },
}
