//! Schedule store: task placements keyed by calendar day.
//!
//! # Responsibility
//! - Own the day → placements mapping persisted under `weekPlan`.
//! - Enforce the duration floor, snap granularity and working-hours window.
//! - Back-fill instance ids on legacy records at load time.
//!
//! # Invariants
//! - `duration_minutes >= config.min_duration_minutes` for every stored
//!   placement.
//! - Instance ids are unique across all days and survive moves unchanged.
//! - Multiple placements of one task may coexist on the same day; the
//!   instance id is the placement identity.

use crate::model::placement::{DayKey, Placement, PlacementId};
use crate::model::task::TaskId;
use crate::storage::{load_record, save_record, RecordKey, Storage};
use log::info;
use serde::Deserialize;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Grid parameters for placement normalization.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleConfig {
    /// Snap granularity for start times and durations.
    pub snap_minutes: u32,
    /// Smallest storable duration.
    pub min_duration_minutes: u32,
    /// Earliest start, minutes from midnight.
    pub day_start_minutes: u32,
    /// Latest end, minutes from midnight.
    pub day_end_minutes: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            snap_minutes: 15,
            min_duration_minutes: 15,
            day_start_minutes: 0,
            day_end_minutes: 24 * 60,
        }
    }
}

/// Wire shape of one stored placement.
///
/// Early revisions of the record carried no instance id and no start time;
/// both get defaults here and ids are back-filled on load. The duration was
/// originally written under the bare `duration` name.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPlacement {
    #[serde(default)]
    id: Option<PlacementId>,
    task_id: TaskId,
    #[serde(default)]
    start_minutes: u32,
    #[serde(default = "default_duration", alias = "duration")]
    duration_minutes: u32,
}

fn default_duration() -> u32 {
    60
}

pub struct ScheduleStore<'s> {
    storage: &'s dyn Storage,
    config: ScheduleConfig,
    plan: BTreeMap<DayKey, Vec<Placement>>,
}

impl<'s> ScheduleStore<'s> {
    /// Loads the week plan, generating fresh instance ids for legacy
    /// entries that lack one. A back-fill re-persists the record once.
    pub fn load(storage: &'s dyn Storage, config: ScheduleConfig) -> Self {
        let stored: BTreeMap<DayKey, Vec<StoredPlacement>> =
            load_record(storage, RecordKey::WeekPlan).unwrap_or_default();

        let mut backfilled = 0usize;
        let plan = stored
            .into_iter()
            .map(|(day, entries)| {
                let placements = entries
                    .into_iter()
                    .map(|entry| Placement {
                        id: entry.id.unwrap_or_else(|| {
                            backfilled += 1;
                            Uuid::new_v4()
                        }),
                        task_id: entry.task_id,
                        start_minutes: entry.start_minutes,
                        duration_minutes: entry
                            .duration_minutes
                            .max(config.min_duration_minutes),
                    })
                    .collect();
                (day, placements)
            })
            .collect();

        let store = Self {
            storage,
            config,
            plan,
        };
        if backfilled > 0 {
            info!(
                "event=placement_id_backfill module=schedule_store status=ok count={backfilled}"
            );
            store.save();
        }
        store
    }

    pub fn config(&self) -> ScheduleConfig {
        self.config
    }

    /// Days that currently hold at least one placement, in key order.
    pub fn days(&self) -> impl Iterator<Item = &DayKey> {
        self.plan.keys()
    }

    /// Placements scheduled on `day`, empty when none.
    pub fn placements_for(&self, day: &DayKey) -> &[Placement] {
        self.plan.get(day).map_or(&[], Vec::as_slice)
    }

    /// Finds a placement by instance id.
    pub fn find(&self, id: PlacementId) -> Option<(&DayKey, &Placement)> {
        self.plan.iter().find_map(|(day, placements)| {
            placements
                .iter()
                .find(|placement| placement.id == id)
                .map(|placement| (day, placement))
        })
    }

    /// Schedules `task` on `day`, returning the fresh instance id.
    ///
    /// Start and duration are snapped and clamped into the configured
    /// window before storing.
    pub fn place(
        &mut self,
        task: TaskId,
        day: DayKey,
        start_minutes: u32,
        duration_minutes: u32,
    ) -> PlacementId {
        let duration = self.normalize_duration(duration_minutes);
        let start = self.clamp_start(start_minutes, duration);
        // Same end-of-window rule as `resize`: the slot never runs past
        // day end, even when the requested duration exceeds the window.
        let room = self.config.day_end_minutes.saturating_sub(start);
        let duration = duration.min(room).max(self.config.min_duration_minutes);
        let placement = Placement {
            id: Uuid::new_v4(),
            task_id: task,
            start_minutes: start,
            duration_minutes: duration,
        };
        let id = placement.id;
        self.plan.entry(day).or_default().push(placement);
        self.save();
        id
    }

    /// Moves a placement to a new day and start, preserving its instance id
    /// and duration. Unknown ids are a no-op.
    pub fn move_placement(
        &mut self,
        id: PlacementId,
        new_day: DayKey,
        new_start_minutes: u32,
    ) -> bool {
        let Some(mut placement) = self.take(id) else {
            return false;
        };
        placement.start_minutes = self.clamp_start(new_start_minutes, placement.duration_minutes);
        self.plan.entry(new_day).or_default().push(placement);
        self.save();
        true
    }

    /// Changes a placement's duration, snapping to granularity and flooring
    /// at the minimum. Unknown ids are a no-op.
    pub fn resize(&mut self, id: PlacementId, new_duration_minutes: u32) -> bool {
        let day_end = self.config.day_end_minutes;
        let normalized = self.normalize_duration(new_duration_minutes);
        let Some(placement) = self
            .plan
            .values_mut()
            .flat_map(|placements| placements.iter_mut())
            .find(|placement| placement.id == id)
        else {
            return false;
        };

        // Never let the slot run past the end of the working window.
        let room = day_end.saturating_sub(placement.start_minutes);
        placement.duration_minutes = normalized.min(room).max(self.config.min_duration_minutes);
        self.save();
        true
    }

    /// Removes one placement by instance id.
    pub fn remove(&mut self, id: PlacementId) -> bool {
        if self.take(id).is_none() {
            return false;
        }
        self.save();
        true
    }

    /// Removes every placement referencing `task`, returning the count.
    /// Cascade hook invoked by `PlannerApp::delete_task`.
    pub fn remove_for_task(&mut self, task: TaskId) -> usize {
        let removed = self.drop_matching(|placement| placement.task_id == task);
        if removed > 0 {
            self.save();
        }
        removed
    }

    /// Drops placements whose task fails `keep`. Used to prune dangling
    /// references at application load.
    pub fn retain_tasks(&mut self, keep: impl Fn(TaskId) -> bool) -> usize {
        let removed = self.drop_matching(|placement| !keep(placement.task_id));
        if removed > 0 {
            self.save();
        }
        removed
    }

    fn take(&mut self, id: PlacementId) -> Option<Placement> {
        let mut found = None;
        for placements in self.plan.values_mut() {
            if let Some(index) = placements.iter().position(|placement| placement.id == id) {
                found = Some(placements.remove(index));
                break;
            }
        }
        self.plan.retain(|_, placements| !placements.is_empty());
        found
    }

    fn drop_matching(&mut self, matches: impl Fn(&Placement) -> bool) -> usize {
        let mut removed = 0usize;
        for placements in self.plan.values_mut() {
            let before = placements.len();
            placements.retain(|placement| !matches(placement));
            removed += before - placements.len();
        }
        self.plan.retain(|_, placements| !placements.is_empty());
        removed
    }

    fn normalize_duration(&self, minutes: u32) -> u32 {
        let snap = self.config.snap_minutes.max(1);
        let snapped = (minutes + snap / 2) / snap * snap;
        snapped.max(self.config.min_duration_minutes)
    }

    fn clamp_start(&self, minutes: u32, duration: u32) -> u32 {
        let snap = self.config.snap_minutes.max(1);
        let snapped = (minutes + snap / 2) / snap * snap;
        let latest = self
            .config
            .day_end_minutes
            .saturating_sub(duration)
            .max(self.config.day_start_minutes);
        snapped.clamp(self.config.day_start_minutes, latest)
    }

    fn save(&self) {
        save_record(self.storage, RecordKey::WeekPlan, &self.plan);
    }
}
