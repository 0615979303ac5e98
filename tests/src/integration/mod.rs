//! # Integration Tests
//!
//! Cross-crate flows. Every test module is `#[cfg(test)]`.

pub mod commit_flow;
pub mod scenarios;
