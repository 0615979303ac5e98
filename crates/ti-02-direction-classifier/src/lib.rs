//! # Direction Classifier Subsystem (TI-02)
//!
//! Labels each transfer from the sender's point of view so the explorer
//! never renders one event as both "sent" and "received".
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): `DirectionTag` and the pure classifier
//! - **Ports Layer** (`ports/`): Inbound API trait
//! - **Service Layer** (`service.rs`): Wires domain logic to the port
//!
//! ## Two-Value Domain
//!
//! The tag is either `out` or `self`. There is no incoming branch: each
//! evaluation is done from a single address's perspective, and labeling the
//! receiving side is a separate evaluation made by another component.

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::direction::{classify_direction, DirectionTag};
pub use ports::inbound::DirectionClassifierApi;
pub use service::DirectionClassifier;
