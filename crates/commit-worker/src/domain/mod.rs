//! # Domain Layer
//!
//! Per-batch screening and the display projection. No I/O.

pub mod errors;
pub mod projection;
pub mod screening;

pub use errors::*;
pub use projection::*;
pub use screening::*;
