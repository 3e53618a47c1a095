use rusqlite::Connection;
use weekplan_core::db::migrations::latest_version;
use weekplan_core::db::open_db_in_memory;
use weekplan_core::storage::{load_record, save_record};
use weekplan_core::{
    ListId, RecordKey, Settings, SqliteStorage, Storage, StorageError, Task, TaskList,
};

#[test]
fn raw_values_round_trip_per_key() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::try_new(&conn).unwrap();

    for key in RecordKey::ALL {
        assert_eq!(storage.load_raw(key), None, "fresh store has no {key}");
        storage.save_raw(key, "[1,2,3]");
        assert_eq!(storage.load_raw(key).as_deref(), Some("[1,2,3]"));
        storage.save_raw(key, "{}");
        assert_eq!(storage.load_raw(key).as_deref(), Some("{}"));
        storage.remove(key);
        assert_eq!(storage.load_raw(key), None);
    }
}

#[test]
fn typed_records_round_trip() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::try_new(&conn).unwrap();

    // Empty collection.
    save_record(&storage, RecordKey::Tasks, &Vec::<Task>::new());
    let empty: Vec<Task> = load_record(&storage, RecordKey::Tasks).unwrap();
    assert!(empty.is_empty());

    // One entry with nested subtasks.
    let mut task = Task::new(ListId::All, "parent", "with subtasks", 1_700_000_000_000, 0);
    task.subtasks.push(weekplan_core::Subtask::new("child"));
    save_record(&storage, RecordKey::Tasks, &vec![task.clone()]);
    let loaded: Vec<Task> = load_record(&storage, RecordKey::Tasks).unwrap();
    assert_eq!(loaded, vec![task]);

    let lists = vec![TaskList::default_all(), TaskList::new("Errands", 1)];
    save_record(&storage, RecordKey::TaskLists, &lists);
    let loaded: Vec<TaskList> = load_record(&storage, RecordKey::TaskLists).unwrap();
    assert_eq!(loaded, lists);

    let settings = Settings::default();
    save_record(&storage, RecordKey::Settings, &settings);
    let loaded: Settings = load_record(&storage, RecordKey::Settings).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn task_wire_format_uses_camel_case() {
    let task = Task::new(ListId::All, "wire check", "desc", 1_700_000_000_000, 3);
    let json = serde_json::to_value(&task).unwrap();

    assert_eq!(json["name"], "wire check");
    assert_eq!(json["listId"], "all");
    assert_eq!(json["createdAt"], 1_700_000_000_000_i64);
    assert_eq!(json["order"], 3);
    assert_eq!(json["completed"], false);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn unparseable_records_read_as_absent() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::try_new(&conn).unwrap();

    storage.save_raw(RecordKey::Tasks, "definitely not json");
    assert_eq!(load_record::<Vec<Task>>(&storage, RecordKey::Tasks), None);

    storage.save_raw(RecordKey::Settings, r#"{"defaultTaskColor":42}"#);
    assert_eq!(load_record::<Settings>(&storage, RecordKey::Settings), None);
}

#[test]
fn missing_records_read_as_absent() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::try_new(&conn).unwrap();
    assert_eq!(load_record::<Vec<Task>>(&storage, RecordKey::Tasks), None);
}

#[test]
fn storage_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteStorage::try_new(&conn) {
        Err(StorageError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn storage_rejects_connection_without_kv_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteStorage::try_new(&conn),
        Err(StorageError::MissingRequiredTable("kv_store"))
    ));
}
