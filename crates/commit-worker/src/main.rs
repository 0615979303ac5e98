//! # Commit Worker Binary
//!
//! ## Commands
//!
//! - `run`: read JSON-lines transfer records, screen them and commit in
//!   batches until the input ends or the process is asked to stop.
//! - `list`: print the most recent stored transfers as direction-tagged
//!   JSON rows, one per line.
//!
//! ## Lifecycle
//!
//! Ctrl-C and SIGTERM are observed here and nowhere else. They fire the
//! worker's shutdown trigger; the current batch finishes before the loop
//! exits. Any error ends the process with a non-zero exit code.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufRead, BufReader};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use commit_worker::adapters::{JsonLinesSource, SqliteTransferStore};
use commit_worker::{project_rows, shutdown_channel, CommitWorker, TransferStore, WorkerConfig};
use ti_01_amount_guard::AmountGuard;
use ti_02_direction_classifier::DirectionClassifier;

#[derive(Parser)]
#[command(author, version, about = "Screens and commits token-transfer events")]
struct Cli {
    /// SQLite database path (overrides TI_DB_PATH)
    #[arg(short, long)]
    db_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Commit records from a JSON-lines input
    Run {
        /// Input file, or "-" for stdin (overrides TI_INPUT)
        #[arg(short, long)]
        input: Option<String>,

        /// Records per commit (overrides TI_BATCH_SIZE)
        #[arg(short, long)]
        batch_size: Option<usize>,
    },
    /// Print recent transfers with their direction tag
    List {
        /// Number of rows
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_env("TI_LOG_LEVEL")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn wait_for_stop_signal() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut terminate =
            signal(SignalKind::terminate()).context("Failed to install SIGTERM handler")?;
        tokio::select! {
            res = tokio::signal::ctrl_c() => res.context("Failed to listen for Ctrl-C")?,
            _ = terminate.recv() => {}
        }
    }
    #[cfg(not(unix))]
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl-C")?;
    Ok(())
}

async fn open_input(config: &WorkerConfig) -> Result<Box<dyn AsyncBufRead + Unpin + Send>> {
    if config.input.is_stdin() {
        return Ok(Box::new(BufReader::new(tokio::io::stdin())));
    }
    let file = tokio::fs::File::open(&config.input.path)
        .await
        .with_context(|| format!("Failed to open input {}", config.input.path))?;
    Ok(Box::new(BufReader::new(file)))
}

async fn run(config: WorkerConfig, store: Arc<SqliteTransferStore>) -> Result<()> {
    let source = JsonLinesSource::new(open_input(&config).await?);
    let worker = CommitWorker::new(source, store, Arc::new(AmountGuard::new()), config.batch);

    let (trigger, signal) = shutdown_channel();
    let mut handle = tokio::spawn(worker.run(signal));

    let stats = tokio::select! {
        joined = &mut handle => joined.context("Commit worker panicked")??,
        stop = wait_for_stop_signal() => {
            stop?;
            info!("Stop signal received, finishing current batch");
            trigger.trigger();
            handle.await.context("Commit worker panicked")??
        }
    };

    info!(
        committed = stats.committed,
        excluded = stats.excluded,
        duplicates = stats.duplicates,
        "Done"
    );
    Ok(())
}

async fn list(store: Arc<SqliteTransferStore>, limit: usize) -> Result<()> {
    let records = store.load_recent(limit).await?;
    for row in project_rows(&DirectionClassifier::new(), &records) {
        println!("{}", serde_json::to_string(&row)?);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let cli = Cli::parse();
    let mut config = WorkerConfig::from_env();
    if let Some(path) = cli.db_path {
        config.storage.db_path = path;
    }
    if let Command::Run { input, batch_size } = &cli.command {
        if let Some(input) = input {
            config.input.path = input.clone();
        }
        if let Some(size) = batch_size {
            config.batch.batch_size = *size;
        }
    }
    config.validate()?;

    let store = Arc::new(
        SqliteTransferStore::open(&config.storage.db_path).with_context(|| {
            format!("Failed to open store at {}", config.storage.db_path.display())
        })?,
    );

    match cli.command {
        Command::Run { .. } => run(config, store).await,
        Command::List { limit } => list(store, limit).await,
    }
}
