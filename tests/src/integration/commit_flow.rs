//! # Commit Flow
//!
//! JSON-lines input through the commit worker into SQLite, then back out as
//! direction-tagged display rows.

#[cfg(test)]
mod tests {
    use commit_worker::adapters::{JsonLinesSource, SqliteTransferStore};
    use commit_worker::{
        project_rows, shutdown_channel, BatchConfig, CommitWorker, StoreError, TransferStore,
    };
    use shared_types::TransferRecord;
    use std::sync::Arc;
    use tempfile::TempDir;
    use ti_01_amount_guard::AmountGuard;
    use ti_02_direction_classifier::{DirectionClassifier, DirectionTag};

    const ALICE: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
    const BOB: &str = "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";

    fn event(block: u64, log_index: u64, to: Option<&str>, amount: &str) -> String {
        serde_json::json!({
            "tx_hash": format!("0x{}", format!("{:02x}", block as u8).repeat(32)),
            "log_index": log_index,
            "block_number": block,
            "token_address": format!("0x{}", "22".repeat(20)),
            "from_address": ALICE,
            "to_address": to,
            "amount": amount,
        })
        .to_string()
    }

    fn config(batch_size: usize) -> BatchConfig {
        BatchConfig {
            batch_size,
            poll_interval_ms: 0,
        }
    }

    #[tokio::test]
    async fn test_mixed_input_commits_every_valid_transfer() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(SqliteTransferStore::open(dir.path().join("transfers.db")).unwrap());

        let input = [
            event(1, 0, Some(ALICE), "123"),
            event(1, 1, Some(BOB), &"9".repeat(79)),
            "not json".to_string(),
            event(2, 0, None, "0"),
            event(2, 1, Some(BOB), "-5"),
            event(3, 0, Some(BOB), &"9".repeat(78)),
        ]
        .join("\n");

        let worker = CommitWorker::new(
            JsonLinesSource::new(input.as_bytes()),
            Arc::clone(&store),
            Arc::new(AmountGuard::new()),
            config(2),
        );
        let (_trigger, signal) = shutdown_channel();
        let stats = worker.run(signal).await.unwrap();

        assert_eq!(stats.received, 5);
        assert_eq!(stats.excluded, 2);
        assert_eq!(stats.committed, 3);
        assert_eq!(store.count().await.unwrap(), 3);

        let records = store.load_recent(10).await.unwrap();
        let rows = project_rows(&DirectionClassifier::new(), &records);
        let tags: Vec<(u64, DirectionTag)> =
            rows.iter().map(|r| (r.block_number, r.direction)).collect();
        assert_eq!(
            tags,
            vec![
                (3, DirectionTag::Out),
                (2, DirectionTag::Out),
                (1, DirectionTag::SelfTransfer),
            ]
        );
        assert_eq!(rows[0].amount, "9".repeat(78));
        assert_eq!(rows[1].to, None);
    }

    #[tokio::test]
    async fn test_unscreened_batch_is_lost_whole() {
        let store = SqliteTransferStore::open_in_memory().unwrap();
        let batch: Vec<TransferRecord> = [
            event(1, 0, Some(BOB), "1"),
            event(1, 1, Some(BOB), &"1".repeat(79)),
        ]
        .iter()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

        let result = store.commit_batch(&batch).await;

        assert!(matches!(result, Err(StoreError::ConstraintViolation(_))));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_block_beyond_integer_column_excluded_not_fatal() {
        let store = Arc::new(SqliteTransferStore::open_in_memory().unwrap());
        let input = [
            event(5, 0, Some(BOB), "1"),
            event(u64::MAX, 0, Some(BOB), "2"),
            event(6, 0, Some(BOB), "3"),
        ]
        .join("\n");

        let worker = CommitWorker::new(
            JsonLinesSource::new(input.as_bytes()),
            Arc::clone(&store),
            Arc::new(AmountGuard::new()),
            config(10),
        );
        let (_trigger, signal) = shutdown_channel();
        let stats = worker.run(signal).await.unwrap();

        assert_eq!(stats.excluded, 1);
        assert_eq!(stats.committed, 2);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_rerun_over_same_input_adds_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transfers.db");
        let input = [event(4, 0, Some(BOB), "7"), event(4, 1, Some(ALICE), "8")].join("\n");

        for pass in 0..2 {
            let store = Arc::new(SqliteTransferStore::open(&path).unwrap());
            let worker = CommitWorker::new(
                JsonLinesSource::new(input.as_bytes()),
                Arc::clone(&store),
                Arc::new(AmountGuard::new()),
                config(10),
            );
            let (_trigger, signal) = shutdown_channel();
            let stats = worker.run(signal).await.unwrap();

            if pass == 0 {
                assert_eq!(stats.committed, 2);
            } else {
                assert_eq!(stats.committed, 0);
                assert_eq!(stats.duplicates, 2);
            }
            assert_eq!(store.count().await.unwrap(), 2);
        }
    }
}
