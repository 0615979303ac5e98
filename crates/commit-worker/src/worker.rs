//! # Commit Worker Run Loop
//!
//! Pulls batches from a `TransferSource`, screens them with the Amount Guard
//! and commits the accepted records through a `TransferStore`.
//!
//! ## Shutdown
//!
//! The loop owns no process state. It receives a [`ShutdownSignal`] and
//! checks it before every batch and while idling between batches; a batch
//! that is already being committed always runs to completion.
//!
//! Shutdown also cancels a `next_batch` call in flight. Records the source
//! had already read into that partial batch are dropped uncommitted. A file
//! input can simply be re-run, since duplicate keys are skipped on insert,
//! but records consumed from stdin are gone.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use ti_01_amount_guard::AmountGuardApi;

use crate::config::BatchConfig;
use crate::domain::{screen_batch, WorkerError};
use crate::ports::{TransferSource, TransferStore};

/// Create a linked shutdown trigger and signal.
pub fn shutdown_channel() -> (ShutdownTrigger, ShutdownSignal) {
    let (tx, rx) = watch::channel(false);
    (ShutdownTrigger { tx }, ShutdownSignal { rx })
}

/// Owned by the process boundary; fires the shutdown.
#[derive(Debug)]
pub struct ShutdownTrigger {
    tx: watch::Sender<bool>,
}

impl ShutdownTrigger {
    /// Request shutdown. Idempotent.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
}

/// Handed to the run loop; observes the shutdown request.
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl ShutdownSignal {
    /// True once shutdown has been requested.
    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves when shutdown is requested.
    ///
    /// If the trigger is dropped without firing, this never resolves.
    pub async fn triggered(&mut self) {
        let closed = self.rx.wait_for(|stop| *stop).await.is_err();
        if closed {
            std::future::pending::<()>().await;
        }
    }
}

/// Counters reported when the loop ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerStats {
    /// Batches pulled from the source.
    pub batches: usize,
    /// Records pulled from the source.
    pub received: usize,
    /// Rows newly written to storage.
    pub committed: usize,
    /// Records dropped by the Amount Guard.
    pub excluded: usize,
    /// Accepted records the store already held.
    pub duplicates: usize,
}

/// The batch-commit worker.
pub struct CommitWorker<S, T> {
    source: S,
    store: T,
    guard: Arc<dyn AmountGuardApi>,
    config: BatchConfig,
}

impl<S: TransferSource, T: TransferStore> CommitWorker<S, T> {
    pub fn new(source: S, store: T, guard: Arc<dyn AmountGuardApi>, config: BatchConfig) -> Self {
        Self {
            source,
            store,
            guard,
            config,
        }
    }

    /// Run until the source is exhausted or shutdown is requested.
    ///
    /// Guard rejections never stop the loop. A source or store failure does,
    /// and is returned to the caller.
    pub async fn run(mut self, mut shutdown: ShutdownSignal) -> Result<WorkerStats, WorkerError> {
        let mut stats = WorkerStats::default();
        info!(
            batch_size = self.config.batch_size,
            precision = self.guard.precision(),
            "Commit worker started"
        );

        loop {
            if shutdown.is_triggered() {
                info!("Shutdown requested, stopping before next batch");
                break;
            }

            let batch = tokio::select! {
                biased;
                _ = shutdown.triggered() => {
                    info!("Shutdown requested while waiting for records");
                    break;
                }
                batch = self.source.next_batch(self.config.batch_size) => batch?,
            };

            if batch.is_empty() {
                info!("Transfer source exhausted");
                break;
            }

            stats.batches += 1;
            stats.received += batch.len();

            let screened = screen_batch(self.guard.as_ref(), batch);
            stats.excluded += screened.excluded.len();

            if !screened.accepted.is_empty() {
                let inserted = self.store.commit_batch(&screened.accepted).await?;
                stats.committed += inserted;
                stats.duplicates += screened.accepted.len().saturating_sub(inserted);
            }

            if !screened.excluded.is_empty() {
                warn!(
                    batch = stats.batches,
                    excluded = screened.excluded.len(),
                    "Batch committed without out-of-range transfers"
                );
            }
            debug!(
                batch = stats.batches,
                accepted = screened.accepted.len(),
                "Batch processed"
            );

            if let Some(interval) = self.config.poll_interval() {
                tokio::select! {
                    biased;
                    _ = shutdown.triggered() => {
                        info!("Shutdown requested while idle");
                        break;
                    }
                    _ = tokio::time::sleep(interval) => {}
                }
            }
        }

        info!(
            batches = stats.batches,
            received = stats.received,
            committed = stats.committed,
            excluded = stats.excluded,
            duplicates = stats.duplicates,
            "Commit worker stopped"
        );
        Ok(stats)
    }
}
