//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `weekplan_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use weekplan_core::db::open_db_in_memory;
use weekplan_core::{PlannerApp, SqliteStorage};

fn main() {
    println!("weekplan_core version={}", weekplan_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open record store: {err}");
            std::process::exit(1);
        }
    };
    let storage = match SqliteStorage::try_new(&conn) {
        Ok(storage) => storage,
        Err(err) => {
            eprintln!("failed to attach record storage: {err}");
            std::process::exit(1);
        }
    };

    let app = PlannerApp::load(&storage);
    println!(
        "loaded planner: tasks={} lists={} notes={} sort_mode={}",
        app.tasks().tasks().len(),
        app.tasks().lists().len(),
        app.notes().notes().len(),
        app.settings().sort_mode()
    );
}
