use weekplan_core::db::open_db_in_memory;
use weekplan_core::{DaySpan, SettingsStore, SortMode, SqliteStorage, DEFAULT_TASK_COLOR};

#[test]
fn fresh_store_exposes_documented_defaults() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::try_new(&conn).unwrap();
    let store = SettingsStore::load(&storage);

    assert_eq!(store.settings().default_task_color, DEFAULT_TASK_COLOR);
    assert_eq!(store.day_span(), DaySpan::Seven);
    assert_eq!(store.sort_mode(), SortMode::Manual);
    assert!(!store.dark_mode());
}

#[test]
fn invalid_hex_colors_are_rejected() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::try_new(&conn).unwrap();
    let mut store = SettingsStore::load(&storage);

    assert!(!store.set_default_task_color("dodgerblue"));
    assert!(!store.set_default_task_color("#12"));
    assert_eq!(store.settings().default_task_color, DEFAULT_TASK_COLOR);

    assert!(store.set_default_task_color("#e74c3c"));
    assert_eq!(store.settings().default_task_color, "#e74c3c");
}

#[test]
fn preferences_survive_reload() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::try_new(&conn).unwrap();
    let mut store = SettingsStore::load(&storage);

    store.set_default_task_color("#2ecc71");
    store.set_day_span(DaySpan::Three);
    store.set_sort_mode(SortMode::NameDesc);
    assert!(store.toggle_dark_mode());

    let reloaded = SettingsStore::load(&storage);
    assert_eq!(reloaded.settings().default_task_color, "#2ecc71");
    assert_eq!(reloaded.day_span(), DaySpan::Three);
    assert_eq!(reloaded.sort_mode(), SortMode::NameDesc);
    assert!(reloaded.dark_mode());
}

#[test]
fn dark_mode_toggles_back_and_forth() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::try_new(&conn).unwrap();
    let mut store = SettingsStore::load(&storage);

    assert!(store.toggle_dark_mode());
    assert!(!store.toggle_dark_mode());
    assert!(!store.dark_mode());
}
