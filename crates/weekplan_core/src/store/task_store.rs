//! Task and task list store.
//!
//! # Responsibility
//! - Own tasks, task lists and the current-task pointer.
//! - Persist the `tasks`, `taskLists` and `currentTaskId` records.
//!
//! # Invariants
//! - The default "all" list is always present and never deleted.
//! - Deleting a list reassigns member tasks to the default list.
//! - `list_sorted` never mutates stored order; only `reorder` does.

use crate::model::list::{ListId, TaskList};
use crate::model::now_epoch_ms;
use crate::model::settings::{is_valid_hex_color, SortMode};
use crate::model::task::{Subtask, SubtaskId, Task, TaskId};
use crate::storage::{load_record, save_record, RecordKey, Storage};
use log::info;

pub struct TaskStore<'s> {
    storage: &'s dyn Storage,
    tasks: Vec<Task>,
    lists: Vec<TaskList>,
    current_task: Option<TaskId>,
}

impl<'s> TaskStore<'s> {
    /// Loads tasks, lists and the current-task pointer, applying defaults
    /// for absent or unreadable records.
    pub fn load(storage: &'s dyn Storage) -> Self {
        let tasks = load_record(storage, RecordKey::Tasks).unwrap_or_default();
        let mut lists: Vec<TaskList> =
            load_record(storage, RecordKey::TaskLists).unwrap_or_default();
        if !lists.iter().any(|list| list.id.is_all()) {
            lists.insert(0, TaskList::default_all());
        }
        let current_task = load_record(storage, RecordKey::CurrentTaskId).unwrap_or_default();

        Self {
            storage,
            tasks,
            lists,
            current_task,
        }
    }

    // ----- tasks -----

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Adds a task to `list` (falling back to the default list when the
    /// list id is unknown). Blank names are a no-op returning `None`.
    pub fn add_task(&mut self, list: &ListId, name: &str, description: &str) -> Option<TaskId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let list_id = if self.list(list).is_some() {
            list.clone()
        } else {
            ListId::All
        };
        let order = self.tasks.len() as i64;
        let task = Task::new(list_id, name, description, now_epoch_ms(), order);
        let id = task.id;
        self.tasks.push(task);
        self.save_tasks();
        Some(id)
    }

    /// Renames a task and replaces its description. Blank names and unknown
    /// ids are no-ops.
    pub fn edit_task(&mut self, id: TaskId, name: &str, description: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };

        task.name = name.to_string();
        let description = description.trim();
        task.description = (!description.is_empty()).then(|| description.to_string());
        self.save_tasks();
        true
    }

    /// Removes a task and clears the current-task pointer when it pointed
    /// at it. The caller owns any confirmation; placement cleanup lives in
    /// `PlannerApp::delete_task`.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return false;
        }

        if self.current_task == Some(id) {
            self.current_task = None;
            self.save_current_task();
        }
        self.save_tasks();
        true
    }

    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        task.completed = !task.completed;
        self.save_tasks();
        true
    }

    // ----- subtasks -----

    pub fn add_subtask(&mut self, task_id: TaskId, name: &str) -> Option<SubtaskId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let task = self.tasks.iter_mut().find(|task| task.id == task_id)?;

        let subtask = Subtask::new(name);
        let id = subtask.id;
        task.subtasks.push(subtask);
        self.save_tasks();
        Some(id)
    }

    pub fn toggle_subtask(&mut self, task_id: TaskId, subtask_id: SubtaskId) -> bool {
        let Some(subtask) = self
            .tasks
            .iter_mut()
            .find(|task| task.id == task_id)
            .and_then(|task| task.subtasks.iter_mut().find(|sub| sub.id == subtask_id))
        else {
            return false;
        };
        subtask.completed = !subtask.completed;
        self.save_tasks();
        true
    }

    pub fn delete_subtask(&mut self, task_id: TaskId, subtask_id: SubtaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == task_id) else {
            return false;
        };
        let before = task.subtasks.len();
        task.subtasks.retain(|sub| sub.id != subtask_id);
        if task.subtasks.len() == before {
            return false;
        }
        self.save_tasks();
        true
    }

    // ----- ordering -----

    /// Persists a manual ordering: each listed task gets an ascending
    /// `order` value; unlisted tasks keep their stored order.
    pub fn reorder(&mut self, ordered: &[TaskId]) {
        let mut changed = false;
        for (position, id) in ordered.iter().enumerate() {
            if let Some(task) = self.tasks.iter_mut().find(|task| task.id == *id) {
                task.order = position as i64;
                changed = true;
            }
        }
        if changed {
            self.save_tasks();
        }
    }

    /// Tasks of `list` (or all tasks for the default id), ordered by `mode`.
    ///
    /// Pure: stored order is untouched. Name modes compare lexically and
    /// case-sensitively; created modes compare timestamps; manual compares
    /// the stored order value with ties left in stored sequence.
    pub fn list_sorted(&self, list: &ListId, mode: SortMode) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|task| list.is_all() || task.list_id == *list)
            .collect();

        match mode {
            SortMode::Manual => tasks.sort_by_key(|task| task.order),
            SortMode::NameAsc => tasks.sort_by(|a, b| a.name.cmp(&b.name)),
            SortMode::NameDesc => tasks.sort_by(|a, b| b.name.cmp(&a.name)),
            SortMode::CreatedAsc => tasks.sort_by_key(|task| task.created_at),
            SortMode::CreatedDesc => tasks.sort_by_key(|task| std::cmp::Reverse(task.created_at)),
        }
        tasks
    }

    // ----- lists -----

    pub fn lists(&self) -> &[TaskList] {
        &self.lists
    }

    pub fn list(&self, id: &ListId) -> Option<&TaskList> {
        self.lists.iter().find(|list| list.id == *id)
    }

    /// Number of tasks shown under `list`.
    pub fn count_tasks(&self, list: &ListId) -> usize {
        if list.is_all() {
            return self.tasks.len();
        }
        self.tasks.iter().filter(|task| task.list_id == *list).count()
    }

    /// Creates a list with a palette color chosen by position. Blank names
    /// are a no-op returning `None`.
    pub fn add_list(&mut self, name: &str) -> Option<ListId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let list = TaskList::new(name, self.lists.len());
        let id = list.id.clone();
        self.lists.push(list);
        self.save_lists();
        Some(id)
    }

    /// Renames a user list. The default list keeps its fixed name.
    pub fn rename_list(&mut self, id: &ListId, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || id.is_all() {
            return false;
        }
        let Some(list) = self.lists.iter_mut().find(|list| list.id == *id) else {
            return false;
        };
        list.name = name.to_string();
        self.save_lists();
        true
    }

    /// Sets a list color after hex validation; invalid input is a no-op.
    pub fn set_list_color(&mut self, id: &ListId, color: &str) -> bool {
        if !is_valid_hex_color(color) {
            return false;
        }
        let Some(list) = self.lists.iter_mut().find(|list| list.id == *id) else {
            return false;
        };
        list.color = Some(color.to_string());
        self.save_lists();
        true
    }

    /// Deletes a user list, reassigning its member tasks to the default
    /// list. The default list itself is refused.
    pub fn delete_list(&mut self, id: &ListId) -> bool {
        if id.is_all() || self.list(id).is_none() {
            return false;
        }

        let mut reassigned = 0usize;
        for task in self.tasks.iter_mut().filter(|task| task.list_id == *id) {
            task.list_id = ListId::All;
            reassigned += 1;
        }
        self.lists.retain(|list| list.id != *id);

        info!("event=list_deleted module=task_store status=ok list={id} reassigned={reassigned}");
        self.save_lists();
        if reassigned > 0 {
            self.save_tasks();
        }
        true
    }

    // ----- current task -----

    pub fn current_task(&self) -> Option<TaskId> {
        self.current_task
    }

    /// Points the current-task marker at an existing task.
    pub fn set_current_task(&mut self, id: TaskId) -> bool {
        if self.task(id).is_none() {
            return false;
        }
        self.current_task = Some(id);
        self.save_current_task();
        true
    }

    pub fn clear_current_task(&mut self) {
        if self.current_task.take().is_some() {
            self.save_current_task();
        }
    }

    // ----- persistence -----

    fn save_tasks(&self) {
        save_record(self.storage, RecordKey::Tasks, &self.tasks);
    }

    fn save_lists(&self) {
        save_record(self.storage, RecordKey::TaskLists, &self.lists);
    }

    fn save_current_task(&self) {
        save_record(self.storage, RecordKey::CurrentTaskId, &self.current_task);
    }
}
