//! Key/value persistence backend
//!
//! One SQLite table (`kv`) keyed by string, with a process-lifetime
//! in-memory map as fallback. Opening never fails: when the database
//! cannot be opened the handle degrades to memory-only and the session
//! keeps working, it just will not survive a restart. On reads a present
//! durable row wins over the memory side.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::config;
use crate::error::Result;

/// Key/value store backed by SQLite with an in-memory fallback.
///
/// Clones share both sides, so every handle in the process sees the same
/// fallback data.
#[derive(Clone)]
pub struct KvStore {
    durable: Option<SqlitePool>,
    memory: Arc<Mutex<HashMap<String, String>>>,
}

impl KvStore {
    /// Open (or create) the database at `db_path`.
    ///
    /// Never fails: any error opening the durable side is logged and the
    /// handle falls back to memory-only.
    pub async fn open(db_path: &Path) -> Self {
        let durable = match connect(db_path).await {
            Ok(pool) => {
                tracing::info!("Opened key/value store at {:?}", db_path);
                Some(pool)
            }
            Err(e) => {
                tracing::warn!(
                    "Key/value store unavailable at {:?}, using in-memory fallback: {}",
                    db_path,
                    e
                );
                None
            }
        };

        Self {
            durable,
            memory: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Memory-only store, for tests and sandboxed environments.
    pub fn ephemeral() -> Self {
        Self {
            durable: None,
            memory: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Whether the durable side is available.
    pub fn is_durable(&self) -> bool {
        self.durable.is_some()
    }

    /// Read a value. A present durable row wins; on durable error or
    /// absence the memory side answers.
    pub async fn get(&self, key: &str) -> Option<String> {
        if let Some(pool) = &self.durable {
            match sqlx::query_scalar::<_, String>("SELECT value FROM kv WHERE key = ?")
                .bind(key)
                .fetch_optional(pool)
                .await
            {
                Ok(Some(value)) => return Some(value),
                Ok(None) => {}
                Err(e) => tracing::warn!("Durable read failed for key '{}': {}", key, e),
            }
        }

        self.memory().get(key).cloned()
    }

    /// Write a value. Never fails: on durable error (or a memory-only
    /// handle) the value lands in the memory side instead.
    pub async fn set(&self, key: &str, value: &str) {
        if let Some(pool) = &self.durable {
            let written = sqlx::query(
                r#"
                INSERT INTO kv (key, value, saved_at)
                VALUES (?, ?, ?)
                ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    saved_at = excluded.saved_at
                "#,
            )
            .bind(key)
            .bind(value)
            .bind(Utc::now())
            .execute(pool)
            .await;

            match written {
                Ok(_) => return,
                Err(e) => {
                    tracing::warn!(
                        "Durable write failed for key '{}', keeping value in memory: {}",
                        key,
                        e
                    );
                }
            }
        }

        self.memory().insert(key.to_string(), value.to_string());
    }

    /// Delete a key from both sides. Durable errors are logged.
    pub async fn remove(&self, key: &str) {
        if let Some(pool) = &self.durable {
            if let Err(e) = sqlx::query("DELETE FROM kv WHERE key = ?")
                .bind(key)
                .execute(pool)
                .await
            {
                tracing::warn!("Durable delete failed for key '{}': {}", key, e);
            }
        }

        self.memory().remove(key);
    }

    fn memory(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.memory.lock().unwrap_or_else(|e| e.into_inner())
    }
}

async fn connect(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let options =
        SqliteConnectOptions::from_str(&format!("sqlite://{}?mode=rwc", db_path.display()))?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(config::KV_BUSY_TIMEOUT_SECS))
            .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            saved_at TEXT NOT NULL
        )
        "#,
    )
    .execute(&pool)
    .await?;

    Ok(pool)
}
