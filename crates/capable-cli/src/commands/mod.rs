//! CLI subcommands. Each module owns one top-level command and funnels
//! into the shared store helpers here.

pub mod config;
pub mod rollover;
pub mod streak;
pub mod task;
pub mod view;

use capable_core::{Database, DayId, Event, SystemClock, TaskStore};

/// Open the task store over the on-disk database and system clock.
pub(crate) fn open_store() -> Result<TaskStore, Box<dyn std::error::Error>> {
    let db = Database::open()?;
    Ok(TaskStore::load(Box::new(db), Box::new(SystemClock)))
}

/// Resolve a `--day` argument, defaulting to today.
pub(crate) fn resolve_day(
    store: &TaskStore,
    day: Option<String>,
) -> Result<DayId, Box<dyn std::error::Error>> {
    match day {
        Some(raw) => Ok(raw.parse()?),
        None => Ok(store.today()),
    }
}

/// Print the human-facing lines for events a mutation produced.
pub(crate) fn report_events(store: &mut TaskStore) {
    for event in store.drain_events() {
        match event {
            Event::StreakIncremented { count, .. } => {
                println!("Streak: {count} day(s) and counting.");
            }
            Event::RolloverApplied { carried, .. } => {
                println!("Carried {carried} task(s) into today.");
            }
            Event::CompletedCleared { removed, .. } => {
                println!("Cleared {removed} completed task(s).");
            }
            Event::StorageWarning { record, message, .. } => {
                eprintln!("warning: could not persist '{record}': {message}");
            }
            Event::TaskCompleted { .. } | Event::TaskUncompleted { .. } => {}
        }
    }
}
