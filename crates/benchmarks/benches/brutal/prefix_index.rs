//! # Prefix Index Brutal Benchmarks
//!
//! Performance claims to validate:
//! - Linear matching is O(leaves x pairs)
//! - Indexed matching is O(leaves x distinct prefix lengths) after an O(pairs) build
//! - Batch expansion scales across cores
//!
//! Brutal conditions:
//! - Thousands of noise pairs for keys nobody in the tree holds

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use expansion_benchmarks::utils::{generate_key, generate_noise_map, KeyShape};
use shared_types::{Key, KeyAlgorithm};
use signature_expansion::{
    ExpansionConfig, ExpansionRequest, PrefixIndex, SignatureExpander, SignatureExpansionApi,
    SignatureExpansionService,
};
use std::time::Duration;

const MAP_SIZES: [usize; 4] = [16, 128, 1_024, 4_096];

/// A key list of 3 threshold keys of 3 leaves each.
fn wide_key() -> Key {
    Key::key_list(
        (0..3)
            .map(|_| generate_key(KeyShape::ThresholdKey, KeyAlgorithm::Ed25519))
            .collect(),
    )
}

pub fn brutal_linear_vs_indexed(c: &mut Criterion) {
    let mut group = c.benchmark_group("expansion/brutal/prefix_index");
    group.measurement_time(Duration::from_secs(10));

    let expander = SignatureExpander::new(ExpansionConfig::default().max_key_depth);
    let key = wide_key();
    let keys = std::slice::from_ref(&key);

    for size in MAP_SIZES {
        let sigs = generate_noise_map(KeyAlgorithm::Ed25519, size, 4);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("linear", size), &sigs, |b, sigs| {
            b.iter(|| black_box(expander.expand_all(keys, sigs)))
        });
        group.bench_with_input(
            BenchmarkId::new("indexed_with_build", size),
            &sigs,
            |b, sigs| {
                b.iter(|| {
                    let index = PrefixIndex::build(sigs);
                    black_box(expander.expand_indexed(keys, &index))
                })
            },
        );

        let index = PrefixIndex::build(&sigs);
        group.bench_with_input(
            BenchmarkId::new("indexed_prebuilt", size),
            &index,
            |b, index| b.iter(|| black_box(expander.expand_indexed(keys, index))),
        );
    }

    group.finish();
}

pub fn brutal_batch_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("expansion/brutal/batch");
    group.measurement_time(Duration::from_secs(10));

    let service = SignatureExpansionService::new();

    for batch_size in [8, 64, 256] {
        let requests: Vec<ExpansionRequest> = (0..batch_size)
            .map(|_| {
                ExpansionRequest::new(
                    vec![wide_key()],
                    generate_noise_map(KeyAlgorithm::Ed25519, 64, 8),
                )
            })
            .collect();

        group.throughput(Throughput::Elements(batch_size as u64));
        group.bench_with_input(
            BenchmarkId::new("parallel", batch_size),
            &requests,
            |b, requests| b.iter(|| black_box(service.expand_batch(requests))),
        );
        group.bench_with_input(
            BenchmarkId::new("sequential", batch_size),
            &requests,
            |b, requests| {
                b.iter(|| {
                    requests
                        .iter()
                        .map(|r| service.expand_keys(&r.keys, &r.signatures))
                        .collect::<Vec<_>>()
                })
            },
        );
    }

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    brutal_linear_vs_indexed(c);
    brutal_batch_expansion(c);
}
