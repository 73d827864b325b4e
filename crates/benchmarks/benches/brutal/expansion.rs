//! # Signature Expansion Brutal Benchmarks
//!
//! Performance claims to validate:
//! - Expansion cost grows with leaves x pairs, not with threshold values
//! - Prefix length does not change the asymptotic cost
//! - ECDSA pairs pay for alias derivation once per expanded pair
//!
//! Brutal conditions:
//! - Signature pairs shuffled so no leaf finds its pair first
//! - Fresh keys from real keypairs for every scenario

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use expansion_benchmarks::utils::{generate_key, generate_signature_map, KeyShape};
use shared_types::KeyAlgorithm;
use signature_expansion::{SignatureExpansionApi, SignatureExpansionService};
use std::time::Duration;

const NUM_SIG_PAIRS: [usize; 4] = [1, 2, 5, 10];
const PREFIX_LENGTHS: [usize; 3] = [10, 20, 30];
const ALGORITHMS: [KeyAlgorithm; 2] = [KeyAlgorithm::Ed25519, KeyAlgorithm::EcdsaSecp256k1];

pub fn brutal_expand_scenarios(c: &mut Criterion) {
    let service = SignatureExpansionService::new();

    for shape in KeyShape::ALL {
        let mut group = c.benchmark_group(format!("expansion/brutal/{}", shape.name()));
        group.measurement_time(Duration::from_secs(5));

        for algorithm in ALGORITHMS {
            for prefix_len in PREFIX_LENGTHS {
                for num_pairs in NUM_SIG_PAIRS {
                    let key = generate_key(shape, algorithm);
                    let sigs = generate_signature_map(&key, num_pairs, prefix_len);

                    group.throughput(Throughput::Elements(num_pairs as u64));
                    group.bench_with_input(
                        BenchmarkId::new(format!("{}/prefix_{}", algorithm, prefix_len), num_pairs),
                        &(key, sigs),
                        |b, (key, sigs)| {
                            b.iter(|| black_box(service.expand_key(black_box(key), black_box(sigs))))
                        },
                    );
                }
            }
        }

        group.finish();
    }
}

pub fn brutal_full_prefixes(c: &mut Criterion) {
    let mut group = c.benchmark_group("expansion/brutal/full_prefixes");
    let service = SignatureExpansionService::new();

    for algorithm in ALGORITHMS {
        for num_pairs in NUM_SIG_PAIRS {
            let key = generate_key(KeyShape::KeyList, algorithm);
            // Prefix length beyond any key: every pair carries the whole key
            let sigs = generate_signature_map(&key, num_pairs, usize::MAX);

            group.bench_with_input(
                BenchmarkId::new(algorithm.to_string(), num_pairs),
                &sigs,
                |b, sigs| b.iter(|| black_box(service.expand_full_prefixes(black_box(sigs)))),
            );
        }
    }

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    brutal_expand_scenarios(c);
    brutal_full_prefixes(c);
}
