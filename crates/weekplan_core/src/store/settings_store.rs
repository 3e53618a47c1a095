//! User preference store.
//!
//! # Responsibility
//! - Own the settings record plus the standalone `sortMode` and `darkMode`
//!   records, each persisted independently.
//!
//! # Invariants
//! - `settings.default_task_color` only ever holds a validated hex color.

use crate::model::settings::{is_valid_hex_color, DaySpan, Settings, SortMode};
use crate::storage::{load_record, save_record, RecordKey, Storage};

pub struct SettingsStore<'s> {
    storage: &'s dyn Storage,
    settings: Settings,
    sort_mode: SortMode,
    dark_mode: bool,
}

impl<'s> SettingsStore<'s> {
    pub fn load(storage: &'s dyn Storage) -> Self {
        Self {
            storage,
            settings: load_record(storage, RecordKey::Settings).unwrap_or_default(),
            sort_mode: load_record(storage, RecordKey::SortMode).unwrap_or_default(),
            dark_mode: load_record(storage, RecordKey::DarkMode).unwrap_or(false),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replaces the default task color; invalid hex input is a no-op.
    pub fn set_default_task_color(&mut self, color: &str) -> bool {
        if !is_valid_hex_color(color) {
            return false;
        }
        self.settings.default_task_color = color.to_string();
        self.save_settings();
        true
    }

    pub fn day_span(&self) -> DaySpan {
        self.settings.calendar_day_span
    }

    pub fn set_day_span(&mut self, span: DaySpan) {
        self.settings.calendar_day_span = span;
        self.save_settings();
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.sort_mode = mode;
        save_record(self.storage, RecordKey::SortMode, &self.sort_mode);
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        save_record(self.storage, RecordKey::DarkMode, &self.dark_mode);
        self.dark_mode
    }

    fn save_settings(&self) {
        save_record(self.storage, RecordKey::Settings, &self.settings);
    }
}
