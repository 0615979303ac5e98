//! # SQLite Transfer Store
//!
//! Relational storage for committed transfers.
//!
//! SQLite has no fixed-precision decimal type, so the amount is kept as
//! canonical decimal text and the `NUMERIC(78, 0)` bound is enforced with a
//! CHECK constraint built from [`NUMERIC_PRECISION`]. As with a real numeric
//! column, one out-of-range value aborts the whole batch transaction.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use rusqlite::{params, Connection, ErrorCode};
use shared_types::{parse_hex_array, to_hex_string, TransferAmount, TransferRecord};
use ti_01_amount_guard::NUMERIC_PRECISION;
use tracing::{debug, info};

use crate::domain::StoreError;
use crate::ports::TransferStore;

// Key conflicts are skipped; a CHECK failure must still abort the transaction.
const INSERT_TRANSFER: &str = "INSERT INTO transfers
    (tx_hash, log_index, block_number, token_address, from_address, to_address, amount, committed_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
    ON CONFLICT (tx_hash, log_index) DO NOTHING";

const SELECT_RECENT: &str = "SELECT tx_hash, log_index, block_number, token_address, from_address, to_address, amount
    FROM transfers
    ORDER BY block_number DESC, log_index DESC
    LIMIT ?1";

/// DDL for the transfers table. The amount bound tracks `NUMERIC_PRECISION`.
pub fn schema_sql() -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS transfers (
            tx_hash       TEXT    NOT NULL,
            log_index     INTEGER NOT NULL,
            block_number  INTEGER NOT NULL,
            token_address TEXT    NOT NULL,
            from_address  TEXT    NOT NULL,
            to_address    TEXT,
            amount        TEXT    NOT NULL
                CHECK (amount NOT GLOB '-*' AND length(amount) <= {NUMERIC_PRECISION}),
            committed_at  INTEGER NOT NULL,
            PRIMARY KEY (tx_hash, log_index)
        );
        CREATE INDEX IF NOT EXISTS idx_transfers_recent
            ON transfers (block_number DESC, log_index DESC);"
    )
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, msg) if e.code == ErrorCode::ConstraintViolation => {
                StoreError::ConstraintViolation(msg.clone().unwrap_or_else(|| e.to_string()))
            }
            _ => StoreError::Database(err.to_string()),
        }
    }
}

/// `TransferStore` backed by a single SQLite connection.
///
/// Statements run on the blocking pool; the connection is serialized behind
/// a mutex.
#[derive(Clone)]
pub struct SqliteTransferStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteTransferStore {
    /// Open or create the database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        info!(path = %path.display(), "Opened transfer store");
        Self::with_connection(conn)
    }

    /// Private in-memory database.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(&schema_sql())?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Number of stored transfers.
    pub async fn count(&self) -> Result<usize, StoreError> {
        self.run_blocking(|conn| {
            let n: i64 = conn.query_row("SELECT COUNT(*) FROM transfers", [], |r| r.get(0))?;
            Ok(n as usize)
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Connection) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut conn = conn.lock();
            f(&mut conn)
        })
        .await
        .map_err(|e| StoreError::Task(e.to_string()))?
    }
}

fn to_sql_int(value: u64, column: &str) -> Result<i64, StoreError> {
    i64::try_from(value)
        .map_err(|_| StoreError::ConstraintViolation(format!("{column} {value} exceeds INTEGER")))
}

fn insert_batch(conn: &mut Connection, records: &[TransferRecord]) -> Result<usize, StoreError> {
    let tx = conn.transaction()?;
    let committed_at = Utc::now().timestamp();
    let mut inserted = 0;
    {
        let mut stmt = tx.prepare_cached(INSERT_TRANSFER)?;
        for record in records {
            inserted += stmt.execute(params![
                to_hex_string(&record.tx_hash),
                to_sql_int(record.log_index, "log_index")?,
                to_sql_int(record.block_number, "block_number")?,
                to_hex_string(&record.token_address),
                to_hex_string(&record.from_address),
                record.to_address.as_ref().map(|a| to_hex_string(a)),
                record.amount.to_string(),
                committed_at,
            ])?;
        }
    }
    tx.commit()?;
    Ok(inserted)
}

/// Row as stored, before decoding.
struct StoredRow {
    tx_hash: String,
    log_index: i64,
    block_number: i64,
    token_address: String,
    from_address: String,
    to_address: Option<String>,
    amount: String,
}

impl StoredRow {
    fn decode(self) -> Result<TransferRecord, StoreError> {
        let corrupt = |what: &str, detail: String| StoreError::Corrupt(format!("{what}: {detail}"));

        Ok(TransferRecord {
            tx_hash: parse_hex_array(&self.tx_hash).map_err(|e| corrupt("tx_hash", e.to_string()))?,
            log_index: u64::try_from(self.log_index)
                .map_err(|e| corrupt("log_index", e.to_string()))?,
            block_number: u64::try_from(self.block_number)
                .map_err(|e| corrupt("block_number", e.to_string()))?,
            token_address: parse_hex_array(&self.token_address)
                .map_err(|e| corrupt("token_address", e.to_string()))?,
            from_address: parse_hex_array(&self.from_address)
                .map_err(|e| corrupt("from_address", e.to_string()))?,
            to_address: self
                .to_address
                .as_deref()
                .map(|hex| parse_hex_array::<20>(hex))
                .transpose()
                .map_err(|e| corrupt("to_address", e.to_string()))?,
            amount: self
                .amount
                .parse::<TransferAmount>()
                .map_err(|e| corrupt("amount", e.to_string()))?,
        })
    }
}

fn select_recent(conn: &mut Connection, limit: usize) -> Result<Vec<TransferRecord>, StoreError> {
    let mut stmt = conn.prepare_cached(SELECT_RECENT)?;
    let rows = stmt.query_map(params![i64::try_from(limit).unwrap_or(i64::MAX)], |row| {
        Ok(StoredRow {
            tx_hash: row.get(0)?,
            log_index: row.get(1)?,
            block_number: row.get(2)?,
            token_address: row.get(3)?,
            from_address: row.get(4)?,
            to_address: row.get(5)?,
            amount: row.get(6)?,
        })
    })?;

    let mut records = Vec::new();
    for row in rows {
        records.push(row?.decode()?);
    }
    Ok(records)
}

#[async_trait]
impl TransferStore for SqliteTransferStore {
    async fn commit_batch(&self, records: &[TransferRecord]) -> Result<usize, StoreError> {
        if records.is_empty() {
            return Ok(0);
        }
        let records = records.to_vec();
        let submitted = records.len();
        let inserted = self
            .run_blocking(move |conn| insert_batch(conn, &records))
            .await?;
        debug!(submitted, inserted, "Committed transfer batch");
        Ok(inserted)
    }

    async fn load_recent(&self, limit: usize) -> Result<Vec<TransferRecord>, StoreError> {
        self.run_blocking(move |conn| select_recent(conn, limit)).await
    }
}
