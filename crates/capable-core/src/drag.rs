//! Drag-and-drop reordering and live reclassification.
//!
//! A drag gesture is a sequence of drag-over events followed by one
//! drag-end event, all scoped to a single day bucket. Drag-over gives a
//! live preview: the dragged task's quadrant changes the moment the
//! pointer enters a different quadrant, and the task slides to the
//! hovered position. Drag-end commits the final within-bucket move.
//! There is no revert path -- an abandoned drag simply leaves the
//! sequence where the last drag-over put it.
//!
//! All position changes go through [`array_move`], a pure remove-insert
//! so every sequence mutation shifts neighbors predictably and repeated
//! identical events are no-ops.

use crate::task::{Quadrant, Task};

/// What the pointer is currently over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget<'a> {
    /// Hovering over another task.
    Task(&'a str),
    /// Hovering over a quadrant's empty zone.
    Zone(Quadrant),
}

/// Move the element at `from` to `to`, shifting everything between.
/// Out-of-bounds or equal indices are a no-op.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

/// Apply one drag-over event to a day's sequence. Returns whether the
/// sequence was mutated.
///
/// The dragged task is looked up by id; a stale reference (task deleted
/// mid-gesture) is ignored. Hovering over the dragged task's own
/// quadrant changes nothing -- within-quadrant reorder waits for
/// drag-end.
pub(crate) fn apply_drag_over(tasks: &mut Vec<Task>, active_id: &str, target: DragTarget<'_>) -> bool {
    let Some(active_index) = tasks.iter().position(|t| t.id == active_id) else {
        return false;
    };

    let (target_quadrant, over_index) = match target {
        DragTarget::Zone(quadrant) => (quadrant, None),
        DragTarget::Task(over_id) => {
            if over_id == active_id {
                return false;
            }
            let Some(over_index) = tasks.iter().position(|t| t.id == over_id) else {
                return false;
            };
            (tasks[over_index].quadrant, Some(over_index))
        }
    };

    if tasks[active_index].quadrant == target_quadrant {
        return false;
    }

    tasks[active_index].quadrant = target_quadrant;
    if let Some(over_index) = over_index {
        array_move(tasks, active_index, over_index);
    }
    true
}

/// Apply the terminal drag-end event: a final move between the dragged
/// task's current index and the drop target's index. Returns whether
/// the sequence was mutated.
pub(crate) fn apply_drag_end(tasks: &mut Vec<Task>, active_id: &str, over_id: &str) -> bool {
    if active_id == over_id {
        return false;
    }
    let Some(from) = tasks.iter().position(|t| t.id == active_id) else {
        return false;
    };
    let Some(to) = tasks.iter().position(|t| t.id == over_id) else {
        return false;
    };
    array_move(tasks, from, to);
    true
}
