//! # Amount Guard Subsystem (TI-01)
//!
//! Validates transfer amounts against the fixed-precision numeric column of
//! the relational store before a record is included in a batch write.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure range checks, no I/O
//! - **Ports Layer** (`ports/`): Inbound API trait
//! - **Service Layer** (`service.rs`): Wires domain logic to the port
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement |
//! |----|-----------|-------------|
//! | INVARIANT-1 | Negative amounts never reach storage | `guard::check_amount` |
//! | INVARIANT-2 | At most 78 decimal digits | `NUMERIC_PRECISION` |
//! | INVARIANT-3 | Total over all integers, no panics | `IntegerAmount` |
//!
//! ## Why Pre-commit
//!
//! A fixed-precision column rejects out-of-range values at write time and
//! aborts the whole enclosing transaction. Checking each record first lets
//! the worker drop the single offender and keep the rest of the batch.

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::errors::AmountRejection;
pub use domain::guard::{check_amount, is_amount_supported};
pub use domain::value_objects::{IntegerAmount, NUMERIC_PRECISION, NUMERIC_SCALE};
pub use ports::inbound::AmountGuardApi;
pub use service::AmountGuard;
