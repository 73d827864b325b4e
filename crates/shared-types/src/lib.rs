//! # Shared Types Crate
//!
//! Decoded value objects shared between transaction decoding and the
//! authorization pipeline.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: key and signature types are defined once here.
//! - **Immutable Values**: everything is a plain value; no interior mutability,
//!   no process-wide state.
//! - **Closed Variants**: [`Key`] is an enum, so every consumer matches it
//!   exhaustively.

pub mod errors;
pub mod keys;
pub mod signatures;

pub use errors::*;
pub use keys::*;
pub use signatures::*;
