//! # Domain Layer
//!
//! Pure classification logic. No I/O, no state.

pub mod direction;

pub use direction::*;
