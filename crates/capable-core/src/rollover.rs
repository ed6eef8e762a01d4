//! Day rollover: migrating yesterday's unfinished tasks into today.
//!
//! This is a data migration, not a completion edge -- carried tasks are
//! recreated with fresh ids and timestamps, and the streak tracker is
//! never involved.

use chrono::{DateTime, Utc};

use crate::task::Task;

/// Outcome of splitting a day bucket for rollover.
#[derive(Debug, Clone)]
pub struct CarryOverResult {
    /// Tasks left behind in the source day (the already-completed ones)
    pub kept: Vec<Task>,
    /// Fresh clones of the unfinished tasks, in their original relative
    /// order, ready to prepend to the target day
    pub carried: Vec<Task>,
}

/// Split a day's tasks into the completed ones to keep and fresh copies
/// of the unfinished ones to carry forward.
///
/// Each carried task gets a newly generated id and `created_at = now`;
/// text and quadrant are copied, completion resets to false.
pub fn carry_unfinished(tasks: &[Task], now: DateTime<Utc>) -> CarryOverResult {
    let mut kept = Vec::new();
    let mut carried = Vec::new();

    for task in tasks {
        if task.completed {
            kept.push(task.clone());
        } else {
            carried.push(Task::new(task.text.clone(), task.quadrant, now));
        }
    }

    CarryOverResult { kept, carried }
}
