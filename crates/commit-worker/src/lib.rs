//! # Commit Worker
//!
//! Batch-commit host for the transfer indexer.
//!
//! ## Flow
//!
//! ```text
//! TransferSource ──batch──→ screen_batch (Amount Guard, TI-01)
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ↓                             ↓
//!             accepted                      excluded
//!                 │                    [warn! + counted]
//!                 ↓
//!   TransferStore::commit_batch  [one transaction per batch]
//!
//! TransferStore::load_recent ──→ project_rows (Direction Classifier, TI-02)
//! ```
//!
//! ## Modular Structure
//!
//! - `config` - Environment-driven configuration
//! - `domain/` - Screening, display projection, errors
//! - `ports/` - Outbound source and store traits
//! - `adapters/` - JSON-lines source, SQLite store, in-memory doubles
//! - `worker` - Run loop with explicit shutdown ownership
//!
//! ## Lifecycle
//!
//! OS signals are observed only by the binary. The worker receives a
//! [`ShutdownSignal`] and checks it between batches; the guard and the
//! classifier never see it.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod worker;

pub use config::{BatchConfig, ConfigError, InputConfig, StorageConfig, WorkerConfig};
pub use domain::{
    project_rows, screen_batch, ExcludedTransfer, ExclusionReason, ScreenedBatch, SourceError,
    StoreError, TransferRow, WorkerError, STORAGE_INT_MAX,
};
pub use ports::{TransferSource, TransferStore};
pub use worker::{shutdown_channel, CommitWorker, ShutdownSignal, ShutdownTrigger, WorkerStats};
