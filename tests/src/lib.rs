//! # Transfer Indexer Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── scenarios.rs     # Guard + classifier end-to-end scenarios
//!     └── commit_flow.rs   # JSON-lines → worker → SQLite → projection
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ti-tests
//! cargo test -p ti-tests integration::commit_flow
//! ```

pub mod integration;
