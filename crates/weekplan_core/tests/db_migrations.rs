use rusqlite::Connection;
use weekplan_core::db::migrations::{apply_migrations, latest_version};
use weekplan_core::db::{open_db, open_db_in_memory, DbError};

#[test]
fn open_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
    assert!(latest_version() > 0);
}

#[test]
fn apply_migrations_is_idempotent() {
    let mut conn = Connection::open_in_memory().unwrap();
    apply_migrations(&mut conn).unwrap();
    apply_migrations(&mut conn).unwrap();

    let table_count: u32 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'kv_store';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(table_count, 1);
}

#[test]
fn newer_schema_versions_are_rejected() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version() + 1))
        .unwrap();

    let err = apply_migrations(&mut conn).unwrap_err();
    assert!(matches!(err, DbError::UnsupportedSchemaVersion { .. }));
}

#[test]
fn file_backed_store_reopens_with_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weekplan.db");

    {
        let conn = open_db(&path).unwrap();
        conn.execute(
            "INSERT INTO kv_store (key, value) VALUES ('tasks', '[]');",
            [],
        )
        .unwrap();
    }

    let conn = open_db(&path).unwrap();
    let value: String = conn
        .query_row("SELECT value FROM kv_store WHERE key = 'tasks';", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(value, "[]");
}
