//! # Key Model
//!
//! Authorization policies attached to accounts, tokens and schedules.
//!
//! A [`Key`] is an immutable tree: leaves are [`SimpleKey`]s (a single public
//! key), interior nodes are [`KeyList`]s (every child required) and
//! [`ThresholdKey`]s (M of N children required). This module only describes
//! structure; matching signatures to keys lives in the signature expansion
//! subsystem, threshold evaluation further down the authorization pipeline.
//!
//! ## Variants
//!
//! | Variant | Meaning | Expandable |
//! |---------|---------|------------|
//! | `Simple` | Ed25519 or ECDSA(secp256k1) public key | yes |
//! | `KeyList` | logical AND over children | yes |
//! | `Threshold` | M-of-N over children | yes |
//! | `ContractId` / `DelegatableContractId` | contract authorization | no |
//! | `Rsa3072` / `EcdsaP384` | legacy key material | no |

use crate::errors::KeyError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of an Ed25519 public key in bytes.
pub const ED25519_KEY_LENGTH: usize = 32;

/// Length of a compressed secp256k1 public key in bytes.
pub const ECDSA_SECP256K1_KEY_LENGTH: usize = 33;

// =============================================================================
// KEY ALGORITHM
// =============================================================================

/// Signature algorithm of a simple key or a signature pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum KeyAlgorithm {
    /// Ed25519 (32-byte public keys).
    Ed25519,
    /// ECDSA over secp256k1 (33-byte compressed public keys).
    EcdsaSecp256k1,
}

impl KeyAlgorithm {
    /// Fixed public key length for this algorithm.
    pub const fn key_length(self) -> usize {
        match self {
            KeyAlgorithm::Ed25519 => ED25519_KEY_LENGTH,
            KeyAlgorithm::EcdsaSecp256k1 => ECDSA_SECP256K1_KEY_LENGTH,
        }
    }
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyAlgorithm::Ed25519 => write!(f, "ED25519"),
            KeyAlgorithm::EcdsaSecp256k1 => write!(f, "ECDSA_SECP256K1"),
        }
    }
}

// =============================================================================
// SIMPLE KEY
// =============================================================================

/// A single public key: the leaf of every key tree.
///
/// The byte length always equals `algorithm.key_length()`; the only way to
/// build one from untrusted bytes is [`SimpleKey::new`], which checks it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSimpleKey")]
pub struct SimpleKey {
    algorithm: KeyAlgorithm,
    public_key: Vec<u8>,
}

impl SimpleKey {
    /// Create a simple key, validating its length against the algorithm.
    ///
    /// ECDSA keys must additionally carry a compressed SEC1 tag (`0x02` or
    /// `0x03`) as their first byte.
    pub fn new(algorithm: KeyAlgorithm, public_key: Vec<u8>) -> Result<Self, KeyError> {
        let expected = algorithm.key_length();
        if public_key.len() != expected {
            return Err(KeyError::InvalidKeyLength {
                algorithm,
                expected,
                actual: public_key.len(),
            });
        }

        if algorithm == KeyAlgorithm::EcdsaSecp256k1 && !matches!(public_key[0], 0x02 | 0x03) {
            return Err(KeyError::InvalidEcdsaPrefix(public_key[0]));
        }

        Ok(Self {
            algorithm,
            public_key,
        })
    }

    /// Create an Ed25519 key from its 32 raw bytes.
    pub fn ed25519(public_key: [u8; ED25519_KEY_LENGTH]) -> Self {
        Self {
            algorithm: KeyAlgorithm::Ed25519,
            public_key: public_key.to_vec(),
        }
    }

    /// Create a secp256k1 key from its 33-byte compressed encoding.
    pub fn ecdsa_secp256k1(
        public_key: [u8; ECDSA_SECP256K1_KEY_LENGTH],
    ) -> Result<Self, KeyError> {
        Self::new(KeyAlgorithm::EcdsaSecp256k1, public_key.to_vec())
    }

    /// Signature algorithm of this key.
    pub fn algorithm(&self) -> KeyAlgorithm {
        self.algorithm
    }

    /// Raw public key bytes.
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }
}

#[derive(Deserialize)]
struct RawSimpleKey {
    algorithm: KeyAlgorithm,
    public_key: Vec<u8>,
}

impl TryFrom<RawSimpleKey> for SimpleKey {
    type Error = KeyError;

    fn try_from(raw: RawSimpleKey) -> Result<Self, Self::Error> {
        SimpleKey::new(raw.algorithm, raw.public_key)
    }
}

// =============================================================================
// COMPOSITE KEYS
// =============================================================================

/// Ordered list of keys, all of which must be satisfied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyList {
    /// Children in declaration order.
    pub keys: Vec<Key>,
}

impl KeyList {
    /// Create a key list from its children.
    pub fn new(keys: Vec<Key>) -> Self {
        Self { keys }
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the list has no children.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// M-of-N key: at least `threshold` of `keys` must be satisfied.
///
/// The threshold is carried as decoded. `1 <= threshold <= keys.len()` is
/// expected but not enforced here; deciding what an out-of-range threshold
/// means belongs to the threshold evaluator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdKey {
    /// Number of children that must be satisfied.
    pub threshold: u32,
    /// Candidate children.
    pub keys: KeyList,
}

impl ThresholdKey {
    /// Create a threshold key.
    pub fn new(threshold: u32, keys: Vec<Key>) -> Self {
        Self {
            threshold,
            keys: KeyList::new(keys),
        }
    }
}

// =============================================================================
// KEY
// =============================================================================

/// An authorization policy node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// A single public key.
    Simple(SimpleKey),
    /// Every child must be satisfied.
    KeyList(KeyList),
    /// At least `threshold` children must be satisfied.
    Threshold(ThresholdKey),
    /// Authorization by a smart contract call.
    ContractId(u64),
    /// Authorization by a contract, including delegate calls.
    DelegatableContractId(u64),
    /// Legacy RSA-3072 key material.
    Rsa3072(Vec<u8>),
    /// Legacy ECDSA P-384 key material.
    EcdsaP384(Vec<u8>),
}

impl Key {
    /// Wrap children in a [`KeyList`].
    pub fn key_list(keys: Vec<Key>) -> Self {
        Key::KeyList(KeyList::new(keys))
    }

    /// Wrap children in a [`ThresholdKey`].
    pub fn threshold(threshold: u32, keys: Vec<Key>) -> Self {
        Key::Threshold(ThresholdKey::new(threshold, keys))
    }

    /// Static variant name, used in errors and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Key::Simple(simple) => match simple.algorithm() {
                KeyAlgorithm::Ed25519 => "ed25519",
                KeyAlgorithm::EcdsaSecp256k1 => "ecdsa_secp256k1",
            },
            Key::KeyList(_) => "key_list",
            Key::Threshold(_) => "threshold_key",
            Key::ContractId(_) => "contract_id",
            Key::DelegatableContractId(_) => "delegatable_contract_id",
            Key::Rsa3072(_) => "rsa_3072",
            Key::EcdsaP384(_) => "ecdsa_384",
        }
    }

    /// Children of a composite key, `None` for everything else.
    pub fn children(&self) -> Option<&[Key]> {
        match self {
            Key::KeyList(list) => Some(&list.keys),
            Key::Threshold(threshold) => Some(&threshold.keys.keys),
            _ => None,
        }
    }

    /// Number of composite levels on the deepest path.
    ///
    /// A simple key (or any non-composite variant) has depth 0, a key list of
    /// simple keys depth 1, and so on. An empty composite still counts as a
    /// level.
    pub fn depth(&self) -> usize {
        match self.children() {
            Some(children) => 1 + children.iter().map(Key::depth).max().unwrap_or(0),
            None => 0,
        }
    }

    /// Number of simple keys in the tree, counting repeats.
    pub fn leaf_count(&self) -> usize {
        self.simple_keys().count()
    }

    /// Every simple key in depth-first declaration order.
    pub fn simple_keys(&self) -> SimpleKeys<'_> {
        SimpleKeys { stack: vec![self] }
    }
}

impl From<SimpleKey> for Key {
    fn from(simple: SimpleKey) -> Self {
        Key::Simple(simple)
    }
}

/// Depth-first iterator over the simple keys of a [`Key`].
pub struct SimpleKeys<'a> {
    stack: Vec<&'a Key>,
}

impl<'a> Iterator for SimpleKeys<'a> {
    type Item = &'a SimpleKey;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(key) = self.stack.pop() {
            match key {
                Key::Simple(simple) => return Some(simple),
                Key::KeyList(_) | Key::Threshold(_) => {
                    if let Some(children) = key.children() {
                        self.stack.extend(children.iter().rev());
                    }
                }
                Key::ContractId(_)
                | Key::DelegatableContractId(_)
                | Key::Rsa3072(_)
                | Key::EcdsaP384(_) => {}
            }
        }
        None
    }
}
