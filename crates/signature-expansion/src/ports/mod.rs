//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API the transaction-dispatch pipeline calls
//! - **Outbound (Driven)**: collaborators that consume the expanded pairs

pub mod inbound;
pub mod outbound;
