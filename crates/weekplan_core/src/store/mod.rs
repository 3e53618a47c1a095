//! In-memory stores mirrored to whole-value records.
//!
//! # Responsibility
//! - Hold the authoritative in-memory state for each feature area.
//! - Persist the affected record whole after every committed mutation.
//!
//! # Invariants
//! - Stores never persist on transient gesture motion; commits come from
//!   gesture end only.
//! - Validation failures (blank names, unknown ids, bad colors) are silent
//!   no-ops, not errors.

pub mod note_store;
pub mod schedule_store;
pub mod settings_store;
pub mod task_store;
