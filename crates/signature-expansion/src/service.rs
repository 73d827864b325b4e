//! # Signature Expansion Service
//!
//! Application service layer that implements the `SignatureExpansionApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`SignatureExpansionApi`)
//! - Picks linear or indexed matching from the configuration
//! - Hands expanded pairs to the outbound ports (`CryptoVerifier`,
//!   `ThresholdEvaluator`) in [`SignatureExpansionService::authorize`]
//!
//! The domain layer never logs; structured events are emitted here.

use crate::config::ExpansionConfig;
use crate::domain::entities::{ExpandedPairSet, ExpansionRequest};
use crate::domain::errors::ExpansionError;
use crate::domain::expander::{self, SignatureExpander};
use crate::domain::index::PrefixIndex;
use crate::ports::inbound::SignatureExpansionApi;
use crate::ports::outbound::{CryptoVerifier, ThresholdEvaluator};
use rayon::prelude::*;
use shared_types::{Key, SignatureMap};
use tracing::{debug, warn};

/// Signature Expansion Service.
///
/// Holds only configuration; every call allocates and returns its own set.
#[derive(Debug, Clone)]
pub struct SignatureExpansionService {
    config: ExpansionConfig,
    expander: SignatureExpander,
}

impl SignatureExpansionService {
    /// Create a new service with default config
    pub fn new() -> Self {
        Self::with_config(ExpansionConfig::default())
    }

    /// Create a new service with custom config
    pub fn with_config(config: ExpansionConfig) -> Self {
        let expander = SignatureExpander::new(config.max_key_depth);
        Self { config, expander }
    }

    pub fn config(&self) -> &ExpansionConfig {
        &self.config
    }

    /// Expand, verify and evaluate a key in one pass.
    ///
    /// Only pairs accepted by `verifier` reach `evaluator`. Structural
    /// expansion failures are returned as errors; the caller must treat them
    /// as "transaction cannot be authorized".
    pub fn authorize<V, E>(
        &self,
        key: &Key,
        signatures: &SignatureMap,
        digest: &[u8],
        verifier: &V,
        evaluator: &E,
    ) -> Result<bool, ExpansionError>
    where
        V: CryptoVerifier + ?Sized,
        E: ThresholdEvaluator + ?Sized,
    {
        let expanded = self.expand_key(key, signatures)?;
        let candidates = expanded.len();

        let verified: ExpandedPairSet = expanded
            .into_iter()
            .filter(|pair| verifier.verify(pair, digest))
            .collect();

        let authorized = evaluator.is_satisfied(key, &verified);

        debug!(
            candidates,
            verified = verified.len(),
            authorized,
            "Key authorization evaluated"
        );

        Ok(authorized)
    }

    fn expand_with_strategy(
        &self,
        keys: &[Key],
        signatures: &SignatureMap,
    ) -> Result<ExpandedPairSet, ExpansionError> {
        if signatures.len() >= self.config.prefix_index_min_pairs {
            let index = PrefixIndex::build(signatures);
            self.expander.expand_indexed(keys, &index)
        } else {
            self.expander.expand_all(keys, signatures)
        }
    }
}

impl Default for SignatureExpansionService {
    fn default() -> Self {
        Self::new()
    }
}

impl SignatureExpansionApi for SignatureExpansionService {
    fn expand_key(
        &self,
        key: &Key,
        signatures: &SignatureMap,
    ) -> Result<ExpandedPairSet, ExpansionError> {
        self.expand_keys(std::slice::from_ref(key), signatures)
    }

    fn expand_keys(
        &self,
        keys: &[Key],
        signatures: &SignatureMap,
    ) -> Result<ExpandedPairSet, ExpansionError> {
        let result = self.expand_with_strategy(keys, signatures);

        match &result {
            Ok(expanded) => debug!(
                keys = keys.len(),
                signature_pairs = signatures.len(),
                expanded = expanded.len(),
                "Signature pairs expanded"
            ),
            Err(error) => warn!(
                keys = keys.len(),
                signature_pairs = signatures.len(),
                %error,
                "Signature expansion rejected key structure"
            ),
        }

        result
    }

    fn expand_full_prefixes(&self, signatures: &SignatureMap) -> ExpandedPairSet {
        let expanded = expander::expand_full_prefixes(signatures);
        debug!(
            signature_pairs = signatures.len(),
            expanded = expanded.len(),
            "Full-prefix signature pairs expanded"
        );
        expanded
    }

    fn expand_batch(
        &self,
        requests: &[ExpansionRequest],
    ) -> Vec<Result<ExpandedPairSet, ExpansionError>> {
        requests
            .par_iter()
            .map(|request| self.expand_keys(&request.keys, &request.signatures))
            .collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
