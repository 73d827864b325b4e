//! # Domain Layer
//!
//! Pure expansion logic with no I/O, no logging and no shared state.
//! This is the inner layer of the hexagonal architecture.

pub mod ecdsa;
pub mod entities;
pub mod errors;
pub mod expander;
pub mod index;
pub mod matcher;
