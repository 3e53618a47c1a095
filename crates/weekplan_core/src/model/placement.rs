//! Calendar placement model.
//!
//! # Responsibility
//! - Model a scheduled occurrence of a task on a specific day.
//! - Define the event shape handed to an external calendar widget.
//!
//! # Invariants
//! - `Placement::id` (the instance id), not the task id, is the identity
//!   used by move/resize/remove; one task may appear on several days or
//!   several times on one day.
//! - `duration_minutes` never goes below the store's configured floor.

use crate::model::task::TaskId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Unique identifier of one placement instance.
pub type PlacementId = Uuid;

/// Day-of-year format used by calendar day keys.
const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// A calendar day key in `YYYY-MM-DD` form.
///
/// Stored records keep the raw string; `DayKey::from_date` and
/// `DayKey::parse` are the validated construction paths.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(String);

impl DayKey {
    /// Builds the key for a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format(DAY_KEY_FORMAT).to_string())
    }

    /// Parses and validates a `YYYY-MM-DD` string.
    pub fn parse(text: &str) -> Option<Self> {
        NaiveDate::parse_from_str(text, DAY_KEY_FORMAT)
            .ok()
            .map(Self::from_date)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The calendar date this key denotes, when well-formed.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, DAY_KEY_FORMAT).ok()
    }
}

impl Display for DayKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One scheduled occurrence of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// Instance id; distinct from `task_id`.
    pub id: PlacementId,
    /// Weak reference to the scheduled task.
    pub task_id: TaskId,
    /// Start of the slot, minutes from midnight.
    pub start_minutes: u32,
    /// Slot length in minutes.
    pub duration_minutes: u32,
}

/// Event record in the shape consumed by the external calendar widget.
///
/// Produced by joining a placement with its task and owning list; dangling
/// placements are omitted rather than surfaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: PlacementId,
    pub title: String,
    pub day: DayKey,
    pub start_minutes: u32,
    pub duration_minutes: u32,
    pub color: String,
}
