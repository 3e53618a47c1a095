//! Domain model for the planner core.
//!
//! # Responsibility
//! - Define the plain serde data types persisted as whole-value records.
//! - Keep wire field names aligned with the legacy camelCase record format.
//!
//! # Invariants
//! - Every entity carries a stable id that is never reused.
//! - Placements reference tasks by id only; they never own task data.

pub mod list;
pub mod note;
pub mod placement;
pub mod settings;
pub mod task;

/// Current wall-clock time in unix epoch milliseconds.
pub(crate) fn now_epoch_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
