use weekplan_core::db::open_db_in_memory;
use weekplan_core::{NoteColor, NotePatch, NoteStore, SqliteStorage};

#[test]
fn create_centers_note_in_viewport() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::try_new(&conn).unwrap();
    let mut store = NoteStore::load(&storage);

    let id = store.create(1000, 800);
    let note = store.note(id).unwrap();
    assert_eq!((note.x, note.y), (375, 300));
    assert_eq!((note.width, note.height), (250, 200));
    assert_eq!(note.color, NoteColor::Yellow);
    assert!(note.content.is_empty());
    assert!(!note.minimized);
}

#[test]
fn create_walks_the_palette() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::try_new(&conn).unwrap();
    let mut store = NoteStore::load(&storage);

    let mut colors = Vec::new();
    for _ in 0..6 {
        let id = store.create(800, 600);
        colors.push(store.note(id).unwrap().color);
    }
    assert_eq!(
        colors,
        vec![
            NoteColor::Yellow,
            NoteColor::Pink,
            NoteColor::Blue,
            NoteColor::Green,
            NoteColor::Purple,
            NoteColor::Yellow,
        ]
    );
}

#[test]
fn cycle_color_wraps_the_palette() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::try_new(&conn).unwrap();
    let mut store = NoteStore::load(&storage);

    let id = store.create(800, 600);
    assert_eq!(store.cycle_color(id), Some(NoteColor::Pink));
    assert_eq!(store.cycle_color(id), Some(NoteColor::Blue));
    assert_eq!(store.cycle_color(id), Some(NoteColor::Green));
    assert_eq!(store.cycle_color(id), Some(NoteColor::Purple));
    assert_eq!(store.cycle_color(id), Some(NoteColor::Yellow));
}

#[test]
fn update_applies_partial_patches() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::try_new(&conn).unwrap();
    let mut store = NoteStore::load(&storage);

    let id = store.create(800, 600);
    assert!(store.update(
        id,
        NotePatch {
            content: Some("remember the milk".to_string()),
            ..NotePatch::default()
        }
    ));
    assert!(store.update(
        id,
        NotePatch {
            minimized: Some(true),
            ..NotePatch::default()
        }
    ));

    let note = store.note(id).unwrap();
    assert_eq!(note.content, "remember the milk");
    assert!(note.minimized);
    // Untouched fields keep their values.
    assert_eq!(note.color, NoteColor::Yellow);
}

#[test]
fn move_and_resize_commit_final_geometry() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::try_new(&conn).unwrap();
    let mut store = NoteStore::load(&storage);

    let id = store.create(800, 600);
    assert!(store.move_note(id, -40, 12));
    assert!(store.resize_note(id, 300, 180));

    let note = store.note(id).unwrap();
    assert_eq!((note.x, note.y), (-40, 12));
    assert_eq!((note.width, note.height), (300, 180));
}

#[test]
fn delete_removes_only_the_target() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::try_new(&conn).unwrap();
    let mut store = NoteStore::load(&storage);

    let first = store.create(800, 600);
    let second = store.create(800, 600);

    assert!(store.delete(first));
    assert!(!store.delete(first));
    assert_eq!(store.notes().len(), 1);
    assert_eq!(store.notes()[0].id, second);
}

#[test]
fn notes_and_visibility_survive_reload() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::try_new(&conn).unwrap();
    let mut store = NoteStore::load(&storage);

    let id = store.create(800, 600);
    store.update(
        id,
        NotePatch {
            content: Some("pinned thought".to_string()),
            ..NotePatch::default()
        },
    );
    assert!(store.toggle_visible());

    let reloaded = NoteStore::load(&storage);
    assert!(reloaded.visible());
    let note = reloaded.note(id).unwrap();
    assert_eq!(note.content, "pinned thought");
    assert_eq!(note.color, NoteColor::Yellow);
}
