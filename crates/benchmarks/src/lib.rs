//! Fixtures shared by the signature expansion benchmarks
pub mod utils {
    use rand::seq::SliceRandom;
    use rand::Rng;
    use shared_types::{Key, KeyAlgorithm, SignatureMap, SignaturePair, SimpleKey};

    /// Shape of the key under test.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum KeyShape {
        /// A single simple key.
        Key,
        /// A key list of three simple keys.
        KeyList,
        /// A 2-of-3 threshold key.
        ThresholdKey,
    }

    impl KeyShape {
        pub const ALL: [KeyShape; 3] = [KeyShape::Key, KeyShape::KeyList, KeyShape::ThresholdKey];

        pub fn name(self) -> &'static str {
            match self {
                KeyShape::Key => "key",
                KeyShape::KeyList => "keyList",
                KeyShape::ThresholdKey => "thresholdKey",
            }
        }
    }

    /// Fresh public key from a real keypair.
    pub fn generate_simple_key(algorithm: KeyAlgorithm) -> SimpleKey {
        let mut rng = rand::thread_rng();
        match algorithm {
            KeyAlgorithm::Ed25519 => {
                let signing_key = ed25519_dalek::SigningKey::generate(&mut rng);
                SimpleKey::ed25519(signing_key.verifying_key().to_bytes())
            }
            KeyAlgorithm::EcdsaSecp256k1 => {
                let signing_key = k256::ecdsa::SigningKey::random(&mut rng);
                let point = signing_key.verifying_key().to_encoded_point(true);
                SimpleKey::new(algorithm, point.as_bytes().to_vec())
                    .expect("compressed SEC1 point is a valid key")
            }
        }
    }

    pub fn generate_key(shape: KeyShape, algorithm: KeyAlgorithm) -> Key {
        let leaves = || {
            (0..3)
                .map(|_| Key::Simple(generate_simple_key(algorithm)))
                .collect::<Vec<_>>()
        };
        match shape {
            KeyShape::Key => Key::Simple(generate_simple_key(algorithm)),
            KeyShape::KeyList => Key::key_list(leaves()),
            KeyShape::ThresholdKey => Key::threshold(2, leaves()),
        }
    }

    /// Signature map with one pair per leaf of `key` (cycling when there are
    /// more pairs than leaves), prefixes cut to `prefix_len`, in random order.
    pub fn generate_signature_map(key: &Key, num_pairs: usize, prefix_len: usize) -> SignatureMap {
        let mut rng = rand::thread_rng();
        let leaves: Vec<&SimpleKey> = key.simple_keys().collect();

        let mut pairs: Vec<SignaturePair> = (0..num_pairs)
            .map(|i| {
                let leaf = leaves[i % leaves.len()];
                let bytes = leaf.public_key();
                let mut signature = vec![0u8; 64];
                rng.fill(&mut signature[..]);
                SignaturePair::new(
                    leaf.algorithm(),
                    bytes[..prefix_len.min(bytes.len())].to_vec(),
                    signature,
                )
            })
            .collect();

        pairs.shuffle(&mut rng);
        SignatureMap::new(pairs)
    }

    /// Signature map of `num_pairs` pairs for keys nobody holds.
    pub fn generate_noise_map(algorithm: KeyAlgorithm, num_pairs: usize, prefix_len: usize) -> SignatureMap {
        (0..num_pairs)
            .map(|_| {
                let key = generate_simple_key(algorithm);
                let bytes = key.public_key();
                SignaturePair::new(
                    algorithm,
                    bytes[..prefix_len.min(bytes.len())].to_vec(),
                    vec![0xAB; 64],
                )
            })
            .collect()
    }
}
