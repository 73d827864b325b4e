//! # Brutal Modular Benchmarks
//!
//! Each module pushes one part of signature expansion well past the sizes a
//! single transaction normally carries.
//!
//! ## Structure
//!
//! - `expansion` - key / keyList / thresholdKey against 1..10 pairs, both
//!   algorithms, prefixes of 10, 20 and 30 bytes
//! - `prefix_index` - linear matching vs the prefix index on large maps,
//!   plus parallel batch expansion

pub mod expansion;
pub mod prefix_index;
