//! Record Store: durable table of Demo records backed by SQLite.
//!
//! Handlers only reach records through `create` and `list_all`. Atomicity
//! between concurrent creates and lists is the storage engine's job; ids come
//! from an AUTOINCREMENT key so they never go backwards.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use tracing::{debug, info};

use demosite_core::error::{DemoSiteError, Result};
use demosite_core::model::{DemoRecord, NewDemo};

use crate::config::DatabaseSection;

fn storage(context: &str, e: sqlx::Error) -> DemoSiteError {
    DemoSiteError::Storage(format!("{context}: {e}"))
}

#[derive(Clone)]
pub struct RecordStore {
    pool: SqlitePool,
}

impl RecordStore {
    /// Open (creating if missing) the configured database and migrate it.
    pub async fn connect(cfg: &DatabaseSection) -> Result<Self> {
        let opts = SqliteConnectOptions::from_str(&cfg.url)
            .map_err(|e| storage("invalid database url", e))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(cfg.max_connections)
            .connect_with(opts)
            .await
            .map_err(|e| storage("failed to open database", e))?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    /// Private in-memory database on a single pinned connection.
    pub async fn in_memory() -> Result<Self> {
        let opts = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| storage("invalid database url", e))?;

        // Every pooled connection would see its own empty database, so keep
        // exactly one and never let it expire.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opts)
            .await
            .map_err(|e| storage("failed to open in-memory database", e))?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS demos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| storage("failed to create demos table", e))?;

        debug!("demos schema ready");
        Ok(())
    }

    /// Validate and persist a new record. The write is committed before this
    /// returns, so a following `list_all` observes it.
    pub async fn create(&self, name: &str, description: &str) -> Result<DemoRecord> {
        let new = NewDemo::new(name, description)?;

        let result = sqlx::query("INSERT INTO demos (name, description) VALUES (?1, ?2)")
            .bind(new.name())
            .bind(new.description())
            .execute(&self.pool)
            .await
            .map_err(|e| storage("failed to insert demo", e))?;

        let record = new.into_record(result.last_insert_rowid());
        info!(demo_id = record.id, name = %record.name, "demo record created");
        Ok(record)
    }

    /// Every record, ascending by id. Unbounded.
    pub async fn list_all(&self) -> Result<Vec<DemoRecord>> {
        let rows = sqlx::query("SELECT id, name, description FROM demos ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage("failed to list demos", e))?;

        rows.iter()
            .map(|row| {
                Ok(DemoRecord {
                    id: row.try_get("id").map_err(|e| storage("bad id column", e))?,
                    name: row.try_get("name").map_err(|e| storage("bad name column", e))?,
                    description: row
                        .try_get("description")
                        .map_err(|e| storage("bad description column", e))?,
                })
            })
            .collect()
    }

    pub async fn count(&self) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM demos")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| storage("failed to count demos", e))
    }

    /// Close all pooled connections.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
