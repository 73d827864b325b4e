//! # Signature Expansion Brutal Benchmarks
//!
//! ## Usage
//!
//! Run all brutal benchmarks:
//! ```bash
//! cargo bench --package expansion-benchmarks --bench brutal_benchmarks
//! ```
//!
//! Run one scenario family:
//! ```bash
//! cargo bench --package expansion-benchmarks --bench brutal_benchmarks -- expansion/brutal/thresholdKey
//! cargo bench --package expansion-benchmarks --bench brutal_benchmarks -- expansion/brutal/prefix_index
//! ```
//!
//! ## Coverage
//!
//! | Group | Scenarios |
//! |-------|-----------|
//! | `key`, `keyList`, `thresholdKey` | {1,2,5,10} pairs x {ED25519, ECDSA_SECP256K1} x prefix {10,20,30} |
//! | `full_prefixes` | full-key prefixes, no key tree |
//! | `prefix_index` | linear vs indexed on 16..4096 pairs |
//! | `batch` | parallel vs sequential batch expansion |

mod brutal;

use criterion::{criterion_group, criterion_main, Criterion};

fn bench_expansion(c: &mut Criterion) {
    brutal::expansion::register_benchmarks(c);
}

fn bench_prefix_index(c: &mut Criterion) {
    brutal::prefix_index::register_benchmarks(c);
}

criterion_group!(
    name = brutal_benches;
    config = Criterion::default()
        .sample_size(100)
        .measurement_time(std::time::Duration::from_secs(10));
    targets =
        bench_expansion,
        bench_prefix_index,
);

criterion_main!(brutal_benches);
