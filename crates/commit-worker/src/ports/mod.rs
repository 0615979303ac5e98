//! # Ports Layer
//!
//! - **Driven Ports (Outbound)**: record source and storage writer, implemented
//!   by the adapters.

pub mod outbound;

pub use outbound::*;
