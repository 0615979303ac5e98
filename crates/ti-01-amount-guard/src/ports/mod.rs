//! # Ports Layer
//!
//! - **Driving Ports (Inbound)**: APIs consumed by the commit worker.
//!
//! The guard has no driven ports: it performs no I/O.

pub mod inbound;

pub use inbound::*;
