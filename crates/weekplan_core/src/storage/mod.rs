//! Persistence adapter over whole-value text records.
//!
//! # Responsibility
//! - Define the narrow load/save/remove contract every store persists through.
//! - Decode and encode record documents, absorbing failures at this boundary.
//!
//! # Invariants
//! - `save` is synchronous and whole-value; there are no partial or merge
//!   writes.
//! - Runtime storage or serialization failure never propagates to callers:
//!   it is logged and the in-memory state stays authoritative for the
//!   session.
//! - A missing or unparseable record reads as absent; callers supply the
//!   documented default.

use log::{error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Display, Formatter};

pub mod sqlite;

pub use sqlite::{SqliteStorage, StorageError};

/// Keys of the independent persisted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKey {
    Tasks,
    TaskLists,
    WeekPlan,
    CurrentTaskId,
    SortMode,
    StickyNotes,
    StickiesVisible,
    DarkMode,
    Settings,
}

impl RecordKey {
    pub const ALL: [RecordKey; 9] = [
        RecordKey::Tasks,
        RecordKey::TaskLists,
        RecordKey::WeekPlan,
        RecordKey::CurrentTaskId,
        RecordKey::SortMode,
        RecordKey::StickyNotes,
        RecordKey::StickiesVisible,
        RecordKey::DarkMode,
        RecordKey::Settings,
    ];

    /// Stable record key string, matching the legacy storage layout.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::TaskLists => "taskLists",
            Self::WeekPlan => "weekPlan",
            Self::CurrentTaskId => "currentTaskId",
            Self::SortMode => "sortMode",
            Self::StickyNotes => "stickyNotes",
            Self::StickiesVisible => "stickiesVisible",
            Self::DarkMode => "darkMode",
            Self::Settings => "settings",
        }
    }
}

impl Display for RecordKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Synchronous whole-value record storage.
///
/// Implementations absorb their own transport failures: a failed read
/// surfaces as `None`, a failed write or remove is a logged no-op.
pub trait Storage {
    /// Loads the raw text of a record, or `None` when absent.
    fn load_raw(&self, key: RecordKey) -> Option<String>;

    /// Replaces the whole stored value of a record.
    fn save_raw(&self, key: RecordKey, value: &str);

    /// Deletes a record; removing an absent key is a no-op.
    fn remove(&self, key: RecordKey);
}

/// Loads and decodes one record.
///
/// Returns `None` for absent records and for records that fail to parse;
/// parse failures are logged and the caller falls back to its default.
pub fn load_record<T: DeserializeOwned>(storage: &dyn Storage, key: RecordKey) -> Option<T> {
    let raw = storage.load_raw(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("event=record_parse_failed module=storage status=error key={key} error={err}");
            None
        }
    }
}

/// Encodes and saves one record whole.
///
/// Serialization failure is logged and the write is skipped.
pub fn save_record<T: Serialize>(storage: &dyn Storage, key: RecordKey, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => storage.save_raw(key, &raw),
        Err(err) => {
            error!("event=record_encode_failed module=storage status=error key={key} error={err}");
        }
    }
}
