//! Core domain logic for WeekPlan.
//! This crate is the single source of truth for planner invariants.

pub mod app;
pub mod db;
pub mod gesture;
pub mod interact;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;

pub use app::PlannerApp;
pub use gesture::{GestureCommit, GestureState, GestureTracker};
pub use interact::{Confirmation, PendingAction};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::list::{ListId, TaskList, DEFAULT_LIST_NAME, LIST_COLOR_PALETTE};
pub use model::note::{NoteColor, NoteId, NotePatch, StickyNote};
pub use model::placement::{CalendarEvent, DayKey, Placement, PlacementId};
pub use model::settings::{DaySpan, Settings, SortMode, DEFAULT_TASK_COLOR};
pub use model::task::{Subtask, SubtaskId, Task, TaskId};
pub use storage::{load_record, save_record, RecordKey, SqliteStorage, Storage, StorageError};
pub use store::note_store::NoteStore;
pub use store::schedule_store::{ScheduleConfig, ScheduleStore};
pub use store::settings_store::SettingsStore;
pub use store::task_store::TaskStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
