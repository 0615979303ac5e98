//! # Adapters
//!
//! Port implementations for the commit worker.
//!
//! - `json_lines` - `TransferSource` over newline-delimited JSON
//! - `sqlite` - `TransferStore` backed by SQLite
//! - `memory` - In-memory source and store for tests and dry runs

pub mod json_lines;
pub mod memory;
pub mod sqlite;

pub use json_lines::JsonLinesSource;
pub use memory::{InMemorySource, InMemoryStore};
pub use sqlite::SqliteTransferStore;
