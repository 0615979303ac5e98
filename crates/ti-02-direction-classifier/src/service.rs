//! # Direction Classifier Service
//!
//! Implements `DirectionClassifierApi` on top of the pure domain function.

use crate::domain::{classify_direction, DirectionTag};
use crate::ports::inbound::DirectionClassifierApi;
use shared_types::Address;

/// Direction Classifier Service.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectionClassifier;

impl DirectionClassifier {
    /// Create a new classifier.
    pub fn new() -> Self {
        Self
    }
}

impl DirectionClassifierApi for DirectionClassifier {
    fn classify(&self, from: &Address, to: Option<&Address>) -> DirectionTag {
        classify_direction(from, to)
    }
}
