//! # Domain Layer
//!
//! Pure domain logic for the Amount Guard subsystem.
//!
//! This module contains NO I/O dependencies and keeps no state between calls.

pub mod errors;
pub mod guard;
pub mod value_objects;

pub use errors::*;
pub use guard::*;
pub use value_objects::*;
