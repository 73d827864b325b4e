//! Configuration for the Signature Expansion Subsystem

use serde::{Deserialize, Serialize};

/// Expansion configuration
///
/// Every node must run with the same `max_key_depth`; it decides which
/// transactions are rejected, so it is ledger-wide policy rather than a
/// local tuning knob.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    /// Maximum nesting of key lists / threshold keys (anti-DoS)
    pub max_key_depth: usize,
    /// Signature maps at least this large are matched through a prefix index
    pub prefix_index_min_pairs: usize,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            max_key_depth: 5,
            prefix_index_min_pairs: 32,
        }
    }
}
