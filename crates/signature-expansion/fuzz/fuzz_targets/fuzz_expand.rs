//! Fuzz target for signature expansion.
//!
//! Feeds arbitrary key trees and signature maps through the expander and
//! checks the properties every node relies on for consensus.
//!
//! ## Running
//!
//! ```bash
//! cd crates/signature-expansion
//! cargo +nightly fuzz run fuzz_expand
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use shared_types::{Key, KeyAlgorithm, SignatureMap, SignaturePair, SimpleKey};
use signature_expansion::{PrefixIndex, SignatureExpander};

/// Arbitrary key tree; ECDSA keys always get a valid compressed tag.
#[derive(Debug, arbitrary::Arbitrary)]
enum FuzzKey {
    Ed25519([u8; 32]),
    Ecdsa(bool, [u8; 32]),
    List(Vec<FuzzKey>),
    Threshold(u32, Vec<FuzzKey>),
    Contract(u64),
}

impl FuzzKey {
    fn into_key(self) -> Key {
        match self {
            FuzzKey::Ed25519(bytes) => Key::Simple(SimpleKey::ed25519(bytes)),
            FuzzKey::Ecdsa(odd, x) => {
                let mut bytes = [0u8; 33];
                bytes[0] = if odd { 0x03 } else { 0x02 };
                bytes[1..].copy_from_slice(&x);
                Key::Simple(SimpleKey::ecdsa_secp256k1(bytes).expect("tag is valid"))
            }
            FuzzKey::List(children) => {
                Key::key_list(children.into_iter().map(FuzzKey::into_key).collect())
            }
            FuzzKey::Threshold(threshold, children) => Key::threshold(
                threshold,
                children.into_iter().map(FuzzKey::into_key).collect(),
            ),
            FuzzKey::Contract(id) => Key::ContractId(id),
        }
    }
}

#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzPair {
    ecdsa: bool,
    prefix: Vec<u8>,
    signature: Vec<u8>,
}

#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    max_depth: u8,
    key: FuzzKey,
    pairs: Vec<FuzzPair>,
}

fuzz_target!(|input: FuzzInput| {
    let expander = SignatureExpander::new(usize::from(input.max_depth % 8));
    let key = input.key.into_key();
    let signatures: SignatureMap = input
        .pairs
        .into_iter()
        .map(|p| {
            let algorithm = if p.ecdsa {
                KeyAlgorithm::EcdsaSecp256k1
            } else {
                KeyAlgorithm::Ed25519
            };
            SignaturePair::new(algorithm, p.prefix, p.signature)
        })
        .collect();

    // Expansion should NEVER panic, regardless of input
    let result = expander.expand(&key, &signatures);

    // 1. Deterministic
    assert_eq!(result, expander.expand(&key, &signatures));

    // 2. Index is a pure optimisation
    let index = PrefixIndex::build(&signatures);
    assert_eq!(
        result,
        expander.expand_indexed(std::slice::from_ref(&key), &index)
    );

    // 3. Bounded by leaves x pairs
    if let Ok(expanded) = result {
        assert!(expanded.len() <= key.leaf_count() * signatures.len());
    }
});
