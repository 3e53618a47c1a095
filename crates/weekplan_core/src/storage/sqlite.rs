//! SQLite implementation of the record storage contract.
//!
//! # Responsibility
//! - Persist whole-value records in the `kv_store` table.
//! - Validate at construction that the connection carries the expected
//!   schema.
//!
//! # Invariants
//! - Construction fails on unmigrated connections; runtime operations never
//!   fail outward (logged no-ops per the adapter contract).

use crate::db::migrations::latest_version;
use crate::storage::{RecordKey, Storage};
use log::error;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Construction-time validation errors for [`SqliteStorage`].
#[derive(Debug)]
pub enum StorageError {
    Db(crate::db::DbError),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(crate::db::DbError::Sqlite(value))
    }
}

/// Record storage over a migrated SQLite connection.
pub struct SqliteStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStorage<'conn> {
    /// Wraps a connection after verifying schema version and table presence.
    pub fn try_new(conn: &'conn Connection) -> Result<Self, StorageError> {
        let expected = latest_version();
        let actual: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual != expected {
            return Err(StorageError::UninitializedConnection {
                expected_version: expected,
                actual_version: actual,
            });
        }

        let table_count: u32 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'kv_store';",
            [],
            |row| row.get(0),
        )?;
        if table_count == 0 {
            return Err(StorageError::MissingRequiredTable("kv_store"));
        }

        Ok(Self { conn })
    }
}

impl Storage for SqliteStorage<'_> {
    fn load_raw(&self, key: RecordKey) -> Option<String> {
        let result = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                params![key.as_str()],
                |row| row.get::<_, String>(0),
            )
            .optional();

        match result {
            Ok(value) => value,
            Err(err) => {
                error!("event=record_load_failed module=storage status=error key={key} error={err}");
                None
            }
        }
    }

    fn save_raw(&self, key: RecordKey, value: &str) {
        let result = self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key.as_str(), value],
        );

        if let Err(err) = result {
            error!("event=record_save_failed module=storage status=error key={key} error={err}");
        }
    }

    fn remove(&self, key: RecordKey) {
        let result = self.conn.execute(
            "DELETE FROM kv_store WHERE key = ?1;",
            params![key.as_str()],
        );

        if let Err(err) = result {
            error!(
                "event=record_remove_failed module=storage status=error key={key} error={err}"
            );
        }
    }
}
