//! # Signature Expansion Subsystem
//!
//! Resolves the signature pairs attached to a transaction to the concrete
//! public keys of its authorization policy, before cryptographic verification
//! and threshold evaluation.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Prefix matching, tree expansion, result set; no I/O
//! - **Ports Layer** (`ports/`): Inbound API, outbound verifier/evaluator contracts
//! - **Service Layer** (`service.rs`): Wires configuration and domain logic to ports
//!
//! ## Consensus Notes
//!
//! - **Deterministic**: the same key and signature map always expand to the
//!   same set on every node
//! - **Bounded**: key nesting is capped by `ExpansionConfig::max_key_depth`;
//!   deeper keys fail instead of being truncated
//! - **Stateless**: no caches, no cross-call state, safe to call concurrently

pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use config::ExpansionConfig;
pub use domain::ecdsa::{evm_alias, keccak256, EvmAlias};
pub use domain::entities::{ExpandedPairSet, ExpandedSignaturePair, ExpansionRequest};
pub use domain::errors::ExpansionError;
pub use domain::expander::{expand_full_prefixes, SignatureExpander};
pub use domain::index::PrefixIndex;
pub use domain::matcher::matches;
pub use ports::inbound::SignatureExpansionApi;
pub use ports::outbound::{CryptoVerifier, ThresholdEvaluator};
pub use service::SignatureExpansionService;
