//! Application state aggregate.
//!
//! # Responsibility
//! - Construct every store over one injected [`Storage`] (no ambient
//!   singletons).
//! - Run cross-store reconciliation: task-delete cascade and dangling
//!   placement pruning.
//! - Translate between placements and the external calendar widget's event
//!   shape.
//!
//! # Invariants
//! - No placement referencing a deleted task survives `delete_task` or
//!   `load`.
//! - Deleting the current task clears the current-task pointer.

use crate::gesture::GestureCommit;
use crate::interact::{Confirmation, PendingAction};
use crate::model::list::ListId;
use crate::model::note::NoteId;
use crate::model::placement::{CalendarEvent, DayKey, PlacementId};
use crate::model::settings::DaySpan;
use crate::model::task::TaskId;
use crate::storage::Storage;
use crate::store::note_store::NoteStore;
use crate::store::schedule_store::{ScheduleConfig, ScheduleStore};
use crate::store::settings_store::SettingsStore;
use crate::store::task_store::TaskStore;
use chrono::{Datelike, Days, NaiveDate};
use log::info;
use std::collections::HashSet;

pub struct PlannerApp<'s> {
    tasks: TaskStore<'s>,
    schedule: ScheduleStore<'s>,
    notes: NoteStore<'s>,
    settings: SettingsStore<'s>,
}

impl<'s> PlannerApp<'s> {
    /// Loads every store from `storage` and prunes placements whose task no
    /// longer exists.
    pub fn load(storage: &'s dyn Storage) -> Self {
        Self::load_with_config(storage, ScheduleConfig::default())
    }

    pub fn load_with_config(storage: &'s dyn Storage, config: ScheduleConfig) -> Self {
        let tasks = TaskStore::load(storage);
        let mut schedule = ScheduleStore::load(storage, config);

        let known: HashSet<TaskId> = tasks.tasks().iter().map(|task| task.id).collect();
        let pruned = schedule.retain_tasks(|task| known.contains(&task));
        if pruned > 0 {
            info!("event=dangling_placements_pruned module=app status=ok count={pruned}");
        }

        Self {
            tasks,
            schedule,
            notes: NoteStore::load(storage),
            settings: SettingsStore::load(storage),
        }
    }

    // ----- store access -----

    pub fn tasks(&self) -> &TaskStore<'s> {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut TaskStore<'s> {
        &mut self.tasks
    }

    pub fn schedule(&self) -> &ScheduleStore<'s> {
        &self.schedule
    }

    pub fn schedule_mut(&mut self) -> &mut ScheduleStore<'s> {
        &mut self.schedule
    }

    pub fn notes(&self) -> &NoteStore<'s> {
        &self.notes
    }

    pub fn notes_mut(&mut self) -> &mut NoteStore<'s> {
        &mut self.notes
    }

    pub fn settings(&self) -> &SettingsStore<'s> {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingsStore<'s> {
        &mut self.settings
    }

    // ----- cross-store operations -----

    /// Deletes a task and everything referencing it: schedule placements
    /// and the current-task pointer.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        if !self.tasks.delete_task(id) {
            return false;
        }
        let removed = self.schedule.remove_for_task(id);
        info!("event=task_deleted module=app status=ok task={id} placements_removed={removed}");
        true
    }

    /// Deletes a user list; member tasks move to the default list and keep
    /// their placements.
    pub fn delete_list(&mut self, id: &ListId) -> bool {
        self.tasks.delete_list(id)
    }

    // ----- calendar widget translation -----

    /// Events for `day` in the external widget shape, joining task names
    /// and list colors. Placements whose task is gone are omitted.
    pub fn calendar_events(&self, day: &DayKey) -> Vec<CalendarEvent> {
        let fallback = &self.settings.settings().default_task_color;
        self.schedule
            .placements_for(day)
            .iter()
            .filter_map(|placement| {
                let task = self.tasks.task(placement.task_id)?;
                let color = self
                    .tasks
                    .list(&task.list_id)
                    .and_then(|list| list.color.clone())
                    .unwrap_or_else(|| fallback.clone());
                Some(CalendarEvent {
                    id: placement.id,
                    title: task.name.clone(),
                    day: day.clone(),
                    start_minutes: placement.start_minutes,
                    duration_minutes: placement.duration_minutes,
                    color,
                })
            })
            .collect()
    }

    /// Widget drop/move callback: re-keys the placement by instance id.
    pub fn event_moved(&mut self, id: PlacementId, day: DayKey, start_minutes: u32) -> bool {
        self.schedule.move_placement(id, day, start_minutes)
    }

    /// Widget resize callback.
    pub fn event_resized(&mut self, id: PlacementId, duration_minutes: u32) -> bool {
        self.schedule.resize(id, duration_minutes)
    }

    /// Widget delete callback.
    pub fn event_removed(&mut self, id: PlacementId) -> bool {
        self.schedule.remove(id)
    }

    /// Visible day keys for the configured span.
    ///
    /// Seven- and five-day spans anchor on the Monday of `today`'s week
    /// (five skipping the weekend); one- and three-day spans anchor on
    /// `today` itself.
    pub fn week_days(&self, today: NaiveDate) -> Vec<DayKey> {
        let span = self.settings.day_span();
        let first = match span {
            DaySpan::Seven | DaySpan::Five => today
                .checked_sub_days(Days::new(u64::from(
                    today.weekday().num_days_from_monday(),
                )))
                .unwrap_or(today),
            DaySpan::One | DaySpan::Three => today,
        };

        (0..u64::from(span.days()))
            .filter_map(|offset| first.checked_add_days(Days::new(offset)))
            .map(DayKey::from_date)
            .collect()
    }

    // ----- gestures -----

    /// Applies a finished gesture to the note store: exactly one
    /// persistence write per commit.
    pub fn apply_gesture(&mut self, commit: GestureCommit) -> bool {
        match commit {
            GestureCommit::Move { note, x, y } => self.notes.move_note(note, x, y),
            GestureCommit::Resize {
                note,
                width,
                height,
            } => self.notes.resize_note(note, width, height),
        }
    }

    // ----- confirmations -----

    /// Confirmation request for deleting a task; `None` for unknown ids.
    pub fn confirm_delete_task(&self, id: TaskId) -> Option<Confirmation> {
        let task = self.tasks.task(id)?;
        Some(Confirmation::new(
            format!("Delete task '{}'? Its calendar entries go too.", task.name),
            PendingAction::DeleteTask(id),
        ))
    }

    /// Confirmation request for deleting a list; refused for the default
    /// list and unknown ids.
    pub fn confirm_delete_list(&self, id: &ListId) -> Option<Confirmation> {
        if id.is_all() {
            return None;
        }
        let list = self.tasks.list(id)?;
        Some(Confirmation::new(
            format!(
                "Delete list '{}'? Tasks will be moved to \"All Tasks\".",
                list.name
            ),
            PendingAction::DeleteList(id.clone()),
        ))
    }

    /// Confirmation request for deleting a sticky note.
    pub fn confirm_delete_note(&self, id: NoteId) -> Option<Confirmation> {
        self.notes.note(id)?;
        Some(Confirmation::new(
            "Delete this sticky note?",
            PendingAction::DeleteNote(id),
        ))
    }

    /// Confirmation request for removing a calendar placement.
    pub fn confirm_remove_placement(&self, id: PlacementId) -> Option<Confirmation> {
        let (_, placement) = self.schedule.find(id)?;
        let title = self
            .tasks
            .task(placement.task_id)
            .map_or("(missing task)", |task| task.name.as_str());
        Some(Confirmation::new(
            format!("Delete event '{title}'?"),
            PendingAction::RemovePlacement(id),
        ))
    }

    /// Executes an accepted action. Unconditional: the yes/no already
    /// happened on the caller's side.
    pub fn apply(&mut self, action: PendingAction) -> bool {
        match action {
            PendingAction::DeleteTask(id) => self.delete_task(id),
            PendingAction::DeleteList(id) => self.delete_list(&id),
            PendingAction::DeleteNote(id) => self.notes.delete(id),
            PendingAction::RemovePlacement(id) => self.schedule.remove(id),
        }
    }
}
