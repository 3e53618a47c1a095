//! Task list model and the reserved "all tasks" identity.
//!
//! # Responsibility
//! - Model named task lists with an optional display color.
//! - Reserve one identifier for the implicit view over every task.
//!
//! # Invariants
//! - `ListId::All` serializes as the literal string `"all"` and is never
//!   a valid user-created list id.
//! - The default list exists in every loaded store and cannot be deleted.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Display name of the implicit list over all tasks.
pub const DEFAULT_LIST_NAME: &str = "All Tasks";

/// Colors handed to newly created lists by cyclic position.
pub const LIST_COLOR_PALETTE: [&str; 6] = [
    "#3498db", "#e74c3c", "#2ecc71", "#f39c12", "#9b59b6", "#1abc9c",
];

/// Identifier of a task list.
///
/// `All` denotes the reserved implicit view over every task; user lists
/// carry a generated uuid. On the wire both forms are a single string:
/// `"all"` or the uuid text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListId {
    /// Reserved id of the implicit "all tasks" view.
    All,
    /// A user-created list.
    List(Uuid),
}

impl ListId {
    /// Generates a fresh user-list id.
    pub fn generate() -> Self {
        Self::List(Uuid::new_v4())
    }

    /// Whether this is the reserved default id.
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl Display for ListId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::List(uuid) => write!(f, "{uuid}"),
        }
    }
}

impl FromStr for ListId {
    type Err = uuid::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == "all" {
            return Ok(Self::All);
        }
        Uuid::parse_str(value).map(Self::List)
    }
}

impl Serialize for ListId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ListId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse()
            .map_err(|_| D::Error::custom(format!("invalid list id `{text}`")))
    }
}

/// A named task list.
///
/// Tasks reference their owning list through `Task::list_id`; the list
/// record itself carries only presentation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskList {
    pub id: ListId,
    pub name: String,
    /// Hex display color; `None` falls back to the default task color.
    #[serde(default)]
    pub color: Option<String>,
    /// Marks the undeletable "all tasks" entry.
    #[serde(default)]
    pub is_default: bool,
}

impl TaskList {
    /// The reserved "all tasks" entry present in every store.
    pub fn default_all() -> Self {
        Self {
            id: ListId::All,
            name: DEFAULT_LIST_NAME.to_string(),
            color: None,
            is_default: true,
        }
    }

    /// Creates a user list with a palette color chosen by position.
    pub fn new(name: impl Into<String>, position: usize) -> Self {
        Self {
            id: ListId::generate(),
            name: name.into(),
            color: Some(LIST_COLOR_PALETTE[position % LIST_COLOR_PALETTE.len()].to_string()),
            is_default: false,
        }
    }
}
