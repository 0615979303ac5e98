//! # Ports Layer
//!
//! - **Driving Ports (Inbound)**: APIs consumed by the display projection.

pub mod inbound;

pub use inbound::*;
