//! # Error Types
//!
//! Structural errors raised while building key model values.

use crate::keys::KeyAlgorithm;
use thiserror::Error;

/// A decoded public key does not fit its algorithm.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyError {
    /// Key bytes have the wrong length for the algorithm.
    #[error("Invalid {algorithm} key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        algorithm: KeyAlgorithm,
        expected: usize,
        actual: usize,
    },

    /// Compressed secp256k1 key does not start with 0x02 or 0x03.
    #[error("Invalid compressed ECDSA key tag: 0x{0:02x}")]
    InvalidEcdsaPrefix(u8),
}
