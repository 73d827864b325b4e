//! # ECDSA Key Aliases (secp256k1)
//!
//! ECDSA simple keys also identify an EVM-style account: the last 20 bytes of
//! the keccak-256 hash of the uncompressed public key (without its `0x04`
//! tag). Expanded pairs carry that alias so the authorization pipeline can
//! resolve alias-addressed accounts without decompressing the key again.

use k256::ecdsa::VerifyingKey;
use sha3::{Digest, Keccak256};

/// 20-byte EVM address derived from an ECDSA public key.
pub type EvmAlias = [u8; 20];

/// Keccak-256 hash function.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Derive the EVM alias of a compressed secp256k1 public key.
///
/// Returns `None` when the bytes do not decompress to a point on the curve.
/// Such keys still expand normally; they simply have no alias and will fail
/// verification downstream.
pub fn evm_alias(compressed: &[u8]) -> Option<EvmAlias> {
    let public_key = VerifyingKey::from_sec1_bytes(compressed).ok()?;
    Some(alias_from_verifying_key(&public_key))
}

/// Derive the EVM alias of a decoded secp256k1 public key.
pub fn alias_from_verifying_key(public_key: &VerifyingKey) -> EvmAlias {
    let uncompressed = public_key.to_encoded_point(false);

    // Skip the 0x04 tag
    let hash = keccak256(&uncompressed.as_bytes()[1..]);

    let mut alias = [0u8; 20];
    alias.copy_from_slice(&hash[12..]);
    alias
}
