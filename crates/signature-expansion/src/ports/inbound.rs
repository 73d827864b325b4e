//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use crate::domain::entities::{ExpandedPairSet, ExpansionRequest};
use crate::domain::errors::ExpansionError;
use shared_types::{Key, SignatureMap};

/// Primary Signature Expansion API.
///
/// Every call is independent: implementations keep no state between calls
/// and must be safe to call from many transaction-handling threads at once.
pub trait SignatureExpansionApi: Send + Sync {
    /// Resolve the signature pairs that could belong to simple keys of `key`.
    ///
    /// # Errors
    /// * `ExpansionError::KeyDepthExceeded` - composite nesting over the limit
    /// * `ExpansionError::UnsupportedKeyType` - key tree contains a variant
    ///   that cannot be matched
    fn expand_key(
        &self,
        key: &Key,
        signatures: &SignatureMap,
    ) -> Result<ExpandedPairSet, ExpansionError>;

    /// Expand several required keys of one transaction into one set.
    fn expand_keys(
        &self,
        keys: &[Key],
        signatures: &SignatureMap,
    ) -> Result<ExpandedPairSet, ExpansionError>;

    /// Expand pairs whose prefix is already a complete public key.
    fn expand_full_prefixes(&self, signatures: &SignatureMap) -> ExpandedPairSet;

    /// Expand many independent transactions.
    ///
    /// Results are returned in request order; each equals what
    /// [`expand_keys`](Self::expand_keys) returns for that request.
    fn expand_batch(
        &self,
        requests: &[ExpansionRequest],
    ) -> Vec<Result<ExpandedPairSet, ExpansionError>>;
}
