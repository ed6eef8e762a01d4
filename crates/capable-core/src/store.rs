//! The task store: day-bucketed tasks, streak, preferences, and every
//! mutation the presentation layer can perform.
//!
//! The store is an explicitly owned object -- no globals. It loads each
//! persisted record once at construction and writes the affected record
//! back after every mutation, in mutation order. A failed write logs a
//! warning and queues an event but never rolls back in-memory state;
//! for the lifetime of the session, memory is the source of truth.
//!
//! Lookup by id is a linear scan over the day map. Data sizes here are
//! a single user's bounded history, so an id index would buy nothing.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::clock::Clock;
use crate::day::DayId;
use crate::drag::{self, DragTarget};
use crate::events::Event;
use crate::rollover;
use crate::storage::KvStore;
use crate::streak::StreakInfo;
use crate::task::{Quadrant, Task, ViewMode};

/// Persisted record keys, one per logical record.
pub const KEY_TASKS: &str = "tasks_map";
pub const KEY_STREAK: &str = "streak";
pub const KEY_MUTED: &str = "muted";
pub const KEY_VIEW_MODE: &str = "view_mode";

/// Per-day aggregate for the calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySummary {
    pub total: usize,
    pub completed: usize,
}

impl DaySummary {
    /// Whether the day has tasks and every one of them is done.
    pub fn all_done(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// The single owned task store.
pub struct TaskStore {
    days: BTreeMap<DayId, Vec<Task>>,
    streak: StreakInfo,
    muted: bool,
    view_mode: ViewMode,
    events: Vec<Event>,
    kv: Box<dyn KvStore>,
    clock: Box<dyn Clock>,
}

impl TaskStore {
    /// Load the store from the persistence capability. Absent or
    /// malformed records silently become defaults -- never a startup
    /// error.
    pub fn load(kv: Box<dyn KvStore>, clock: Box<dyn Clock>) -> Self {
        let days = read_record(kv.as_ref(), KEY_TASKS).unwrap_or_default();
        let streak = read_record(kv.as_ref(), KEY_STREAK).unwrap_or_default();
        let muted = read_record(kv.as_ref(), KEY_MUTED).unwrap_or(false);
        let view_mode = read_record(kv.as_ref(), KEY_VIEW_MODE).unwrap_or_default();

        TaskStore {
            days,
            streak,
            muted,
            view_mode,
            events: Vec::new(),
            kv,
            clock,
        }
    }

    // ---- mutation operations -------------------------------------------

    /// Add a task to the front of `day`'s bucket (newest first).
    /// Whitespace-only text is a validation rejection: no-op, `None`.
    pub fn add_task(&mut self, day: DayId, text: &str, quadrant: Quadrant) -> Option<Task> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let task = Task::new(text, quadrant, self.clock.now());
        self.days.entry(day).or_default().insert(0, task.clone());
        self.save_tasks();
        Some(task)
    }

    /// Replace a task's text with the trimmed value, in place. An edit
    /// down to empty deletes the task instead (deliberate UX shortcut).
    /// Unknown ids are ignored.
    pub fn update_text(&mut self, id: &str, new_text: &str) {
        let trimmed = new_text.trim();
        if trimmed.is_empty() {
            self.delete_task(id);
            return;
        }
        let Some(task) = self.find_mut(id) else {
            return;
        };
        task.text = trimmed.to_string();
        self.save_tasks();
    }

    /// Flip a task's completion. The incomplete -> complete edge is the
    /// single event that drives the streak, keyed by the wall-clock day
    /// of the toggle (not the task's bucket day). The reverse edge has
    /// no streak effect.
    pub fn toggle(&mut self, id: &str) {
        let now = self.clock.now();
        let today = self.clock.today();

        let (completed, quadrant, age_days) = {
            let Some(task) = self.find_mut(id) else {
                return;
            };
            task.completed = !task.completed;
            (task.completed, task.quadrant, task.age_days(now))
        };

        if completed {
            let (next, incremented) = self.streak.record_completion(today);
            self.streak = next;
            self.events.push(Event::TaskCompleted {
                quadrant,
                age_days,
                at: now,
            });
            if incremented {
                self.events.push(Event::StreakIncremented {
                    count: self.streak.count,
                    at: now,
                });
            }
            self.save_streak();
        } else {
            self.events.push(Event::TaskUncompleted { at: now });
        }
        self.save_tasks();
    }

    /// Remove a task by id; relative order of the rest is untouched.
    pub fn delete_task(&mut self, id: &str) {
        let mut removed = false;
        for tasks in self.days.values_mut() {
            let before = tasks.len();
            tasks.retain(|t| t.id != id);
            if tasks.len() != before {
                removed = true;
                break;
            }
        }
        if removed {
            self.save_tasks();
        }
    }

    /// Change a task's quadrant in place. Positioning relative to a
    /// specific target task goes through [`TaskStore::drag_over`].
    pub fn reclassify(&mut self, id: &str, quadrant: Quadrant) {
        let Some(task) = self.find_mut(id) else {
            return;
        };
        if task.quadrant == quadrant {
            return;
        }
        task.quadrant = quadrant;
        self.save_tasks();
    }

    /// Move the task at `from` to `to` within one day's bucket.
    /// Out-of-bounds or equal indices are a no-op.
    pub fn reorder(&mut self, day: DayId, from: usize, to: usize) {
        let Some(tasks) = self.days.get_mut(&day) else {
            return;
        };
        if from == to || from >= tasks.len() || to >= tasks.len() {
            return;
        }
        drag::array_move(tasks, from, to);
        self.save_tasks();
    }

    /// Remove every completed task from a day's bucket. Returns the
    /// count removed; the caller decides whether that warranted a
    /// confirmation prompt beforehand.
    pub fn clear_completed(&mut self, day: DayId) -> usize {
        let removed = match self.days.get_mut(&day) {
            Some(tasks) => {
                let before = tasks.len();
                tasks.retain(|t| !t.completed);
                before - tasks.len()
            }
            None => 0,
        };
        if removed > 0 {
            let at = self.clock.now();
            self.events.push(Event::CompletedCleared { removed, at });
            self.save_tasks();
        }
        removed
    }

    // ---- drag gesture ---------------------------------------------------

    /// One drag-over event within `day`'s bucket: live quadrant preview
    /// plus positional move when hovering over another task. Stale
    /// references are ignored; repeated identical events change nothing.
    pub fn drag_over(&mut self, day: DayId, active_id: &str, target: DragTarget<'_>) {
        let Some(tasks) = self.days.get_mut(&day) else {
            return;
        };
        if drag::apply_drag_over(tasks, active_id, target) {
            self.save_tasks();
        }
    }

    /// The terminal drag-end event: final move to the drop target's
    /// index. Released with no valid target or over itself, the bucket
    /// stays as the last drag-over left it.
    pub fn drag_end(&mut self, day: DayId, active_id: &str, over_id: &str) {
        let Some(tasks) = self.days.get_mut(&day) else {
            return;
        };
        if drag::apply_drag_end(tasks, active_id, over_id) {
            self.save_tasks();
        }
    }

    // ---- rollover -------------------------------------------------------

    /// Whether the rollover offer should be shown: the selected day is
    /// today, yesterday has unfinished tasks, and today is still empty.
    ///
    /// This is the offer signal itself, in pull form. Consumers poll it
    /// after each mutation or day change; eligibility depends on the
    /// selected day, which the core does not track, so no event is
    /// queued. Derived on demand, never persisted.
    pub fn rollover_available(&self, selected: DayId) -> bool {
        let today = self.clock.today();
        if selected != today {
            return false;
        }
        let has_unfinished = self
            .tasks_for_day(today.yesterday())
            .iter()
            .any(|t| !t.completed);
        has_unfinished && self.tasks_for_day(today).is_empty()
    }

    /// Migrate yesterday's unfinished tasks into today: fresh copies are
    /// prepended to today's bucket in their original relative order, and
    /// yesterday keeps only its completed tasks. Returns the number
    /// carried. Never touches the streak.
    pub fn rollover(&mut self) -> usize {
        let now = self.clock.now();
        let today = self.clock.today();
        let yesterday = today.yesterday();

        let Some(prev) = self.days.get(&yesterday) else {
            return 0;
        };
        let result = rollover::carry_unfinished(prev, now);
        if result.carried.is_empty() {
            return 0;
        }
        let carried = result.carried.len();

        self.days.insert(yesterday, result.kept);
        let bucket = self.days.entry(today).or_default();
        let mut merged = result.carried;
        merged.append(bucket);
        *bucket = merged;

        self.events.push(Event::RolloverApplied { carried, at: now });
        self.save_tasks();
        carried
    }

    // ---- preferences ----------------------------------------------------

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.save_record(KEY_MUTED, &muted);
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        self.save_record(KEY_VIEW_MODE, &mode);
    }

    // ---- read views -----------------------------------------------------

    /// The current wall-clock day, from the injected clock.
    pub fn today(&self) -> DayId {
        self.clock.today()
    }

    /// A day's ordered tasks; a never-written day is an empty slice.
    pub fn tasks_for_day(&self, day: DayId) -> &[Task] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The subset of a day's tasks in one quadrant, in bucket order.
    pub fn tasks_by_quadrant(&self, day: DayId, quadrant: Quadrant) -> Vec<&Task> {
        self.tasks_for_day(day)
            .iter()
            .filter(|t| t.quadrant == quadrant)
            .collect()
    }

    /// A day's tasks sorted for the linear focus view: by quadrant
    /// priority, stable within a quadrant.
    pub fn focus_order(&self, day: DayId) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.tasks_for_day(day).iter().collect();
        tasks.sort_by_key(|t| t.quadrant.priority());
        tasks
    }

    /// Incomplete Do-quadrant tasks for a day (drives the UI stress
    /// level).
    pub fn urgent_count(&self, day: DayId) -> usize {
        self.tasks_for_day(day)
            .iter()
            .filter(|t| t.quadrant == Quadrant::Do && !t.completed)
            .count()
    }

    /// Totals for the calendar's per-day markers.
    pub fn day_summary(&self, day: DayId) -> DaySummary {
        let tasks = self.tasks_for_day(day);
        DaySummary {
            total: tasks.len(),
            completed: tasks.iter().filter(|t| t.completed).count(),
        }
    }

    /// Days that currently hold at least one task, in chronological
    /// order.
    pub fn days(&self) -> Vec<DayId> {
        self.days
            .iter()
            .filter(|(_, tasks)| !tasks.is_empty())
            .map(|(day, _)| *day)
            .collect()
    }

    /// Look up a task anywhere in the store.
    pub fn find(&self, id: &str) -> Option<&Task> {
        self.days.values().flatten().find(|t| t.id == id)
    }

    pub fn streak(&self) -> &StreakInfo {
        &self.streak
    }

    /// Take all queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    // ---- persistence ----------------------------------------------------

    fn find_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.days.values_mut().flatten().find(|t| t.id == id)
    }

    fn save_tasks(&mut self) {
        match serde_json::to_string(&self.days) {
            Ok(raw) => self.write_record(KEY_TASKS, raw),
            Err(e) => self.storage_warning(KEY_TASKS, e.to_string()),
        }
    }

    fn save_streak(&mut self) {
        match serde_json::to_string(&self.streak) {
            Ok(raw) => self.write_record(KEY_STREAK, raw),
            Err(e) => self.storage_warning(KEY_STREAK, e.to_string()),
        }
    }

    fn save_record<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.write_record(key, raw),
            Err(e) => self.storage_warning(key, e.to_string()),
        }
    }

    fn write_record(&mut self, key: &str, raw: String) {
        if let Err(e) = self.kv.set(key, &raw) {
            warn!(key, error = %e, "persistence write failed; keeping in-memory state");
            self.storage_warning(key, e.to_string());
        }
    }

    fn storage_warning(&mut self, record: &str, message: String) {
        self.events.push(Event::StorageWarning {
            record: record.to_string(),
            message,
            at: self.clock.now(),
        });
    }
}

fn read_record<T: DeserializeOwned>(kv: &dyn KvStore, key: &str) -> Option<T> {
    match kv.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "malformed persisted record, resetting to default");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!(key, error = %e, "persistence read failed, using default");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::storage::MemoryStore;
    use chrono::Utc;

    fn day(s: &str) -> DayId {
        s.parse().unwrap()
    }

    fn store_on(today: &str) -> (TaskStore, FixedClock) {
        let clock = FixedClock::new(Utc::now(), day(today));
        let store = TaskStore::load(
            Box::new(MemoryStore::default()),
            Box::new(clock.clone()),
        );
        (store, clock)
    }

    fn texts(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn add_prepends_newest_first() {
        let (mut store, _) = store_on("2026-08-29");
        let d = day("2026-08-29");
        store.add_task(d, "x", Quadrant::Do);
        store.add_task(d, "y", Quadrant::Do);
        assert_eq!(texts(store.tasks_for_day(d)), vec!["y", "x"]);
    }

    #[test]
    fn add_rejects_whitespace_text() {
        let (mut store, _) = store_on("2026-08-29");
        assert!(store.add_task(day("2026-08-29"), "   ", Quadrant::Do).is_none());
        assert!(store.tasks_for_day(day("2026-08-29")).is_empty());
    }

    #[test]
    fn add_trims_text() {
        let (mut store, _) = store_on("2026-08-29");
        let task = store
            .add_task(day("2026-08-29"), "  padded  ", Quadrant::Do)
            .unwrap();
        assert_eq!(task.text, "padded");
    }

    #[test]
    fn missing_day_reads_as_empty() {
        let (store, _) = store_on("2026-08-29");
        assert!(store.tasks_for_day(day("1999-01-01")).is_empty());
        assert_eq!(store.day_summary(day("1999-01-01")).total, 0);
    }

    #[test]
    fn empty_edit_deletes_the_task() {
        let (mut store, _) = store_on("2026-08-29");
        let d = day("2026-08-29");
        let task = store.add_task(d, "doomed", Quadrant::Do).unwrap();
        store.update_text(&task.id, "   ");
        assert!(store.find(&task.id).is_none());
        assert!(store.tasks_for_day(d).is_empty());
    }

    #[test]
    fn edit_replaces_text_in_place() {
        let (mut store, _) = store_on("2026-08-29");
        let d = day("2026-08-29");
        store.add_task(d, "first", Quadrant::Do);
        let task = store.add_task(d, "second", Quadrant::Do).unwrap();
        store.update_text(&task.id, "  renamed ");
        assert_eq!(texts(store.tasks_for_day(d)), vec!["renamed", "first"]);
    }

    #[test]
    fn toggle_round_trip_keeps_streak_single() {
        let (mut store, _) = store_on("2026-08-29");
        let task = store.add_task(day("2026-08-29"), "t", Quadrant::Do).unwrap();

        store.toggle(&task.id);
        assert_eq!(store.streak().count, 1);
        store.toggle(&task.id);
        assert!(!store.find(&task.id).unwrap().completed);
        assert_eq!(store.streak().count, 1);
        store.toggle(&task.id);
        // Same-day re-completion does not inflate the count.
        assert_eq!(store.streak().count, 1);
    }

    #[test]
    fn streak_extends_on_consecutive_days_and_resets_after_gap() {
        let (mut store, clock) = store_on("2026-08-29");
        let d = day("2026-08-29");
        let a = store.add_task(d, "a", Quadrant::Do).unwrap();
        let b = store.add_task(d, "b", Quadrant::Do).unwrap();
        let c = store.add_task(d, "c", Quadrant::Do).unwrap();

        store.toggle(&a.id);
        assert_eq!(store.streak().count, 1);

        clock.advance_days(1);
        store.toggle(&b.id);
        assert_eq!(store.streak().count, 2);

        clock.advance_days(3);
        store.toggle(&c.id);
        assert_eq!(store.streak().count, 1);
    }

    #[test]
    fn completing_backdated_task_counts_toward_today() {
        let (mut store, _) = store_on("2026-08-29");
        let task = store.add_task(day("2026-08-01"), "old", Quadrant::Do).unwrap();
        store.toggle(&task.id);
        assert_eq!(
            store.streak().last_completion_date,
            Some(day("2026-08-29"))
        );
    }

    #[test]
    fn toggle_emits_completion_events() {
        let (mut store, _) = store_on("2026-08-29");
        let task = store.add_task(day("2026-08-29"), "t", Quadrant::Do).unwrap();
        store.drain_events();

        store.toggle(&task.id);
        let events = store.drain_events();
        assert!(matches!(events[0], Event::TaskCompleted { quadrant: Quadrant::Do, .. }));
        assert!(matches!(events[1], Event::StreakIncremented { count: 1, .. }));

        store.toggle(&task.id);
        let events = store.drain_events();
        assert!(matches!(events[0], Event::TaskUncompleted { .. }));
    }

    #[test]
    fn toggle_unknown_id_is_silent() {
        let (mut store, _) = store_on("2026-08-29");
        store.toggle("ghost");
        assert_eq!(store.streak().count, 0);
        assert!(store.drain_events().is_empty());
    }

    #[test]
    fn delete_preserves_remaining_order() {
        let (mut store, _) = store_on("2026-08-29");
        let d = day("2026-08-29");
        store.add_task(d, "c", Quadrant::Do);
        let b = store.add_task(d, "b", Quadrant::Do).unwrap();
        store.add_task(d, "a", Quadrant::Do);

        store.delete_task(&b.id);
        assert_eq!(texts(store.tasks_for_day(d)), vec!["a", "c"]);
    }

    #[test]
    fn reclassify_changes_quadrant_only() {
        let (mut store, _) = store_on("2026-08-29");
        let d = day("2026-08-29");
        store.add_task(d, "other", Quadrant::Do);
        let task = store.add_task(d, "t", Quadrant::Do).unwrap();

        store.reclassify(&task.id, Quadrant::Eliminate);
        assert_eq!(store.find(&task.id).unwrap().quadrant, Quadrant::Eliminate);
        assert_eq!(texts(store.tasks_for_day(d)), vec!["t", "other"]);
    }

    #[test]
    fn reorder_moves_within_bucket() {
        let (mut store, _) = store_on("2026-08-29");
        let d = day("2026-08-29");
        store.add_task(d, "c", Quadrant::Do);
        store.add_task(d, "b", Quadrant::Do);
        store.add_task(d, "a", Quadrant::Do);

        store.reorder(d, 0, 2);
        assert_eq!(texts(store.tasks_for_day(d)), vec!["b", "c", "a"]);

        // Out-of-bounds and equal indices change nothing.
        store.reorder(d, 7, 0);
        store.reorder(d, 1, 1);
        assert_eq!(texts(store.tasks_for_day(d)), vec!["b", "c", "a"]);
    }

    #[test]
    fn clear_completed_returns_count() {
        let (mut store, _) = store_on("2026-08-29");
        let d = day("2026-08-29");
        let a = store.add_task(d, "a", Quadrant::Do).unwrap();
        store.add_task(d, "b", Quadrant::Do);
        let c = store.add_task(d, "c", Quadrant::Do).unwrap();
        store.toggle(&a.id);
        store.toggle(&c.id);

        assert_eq!(store.clear_completed(d), 2);
        assert_eq!(texts(store.tasks_for_day(d)), vec!["b"]);
        assert_eq!(store.clear_completed(d), 0);
    }

    #[test]
    fn cross_quadrant_drag_updates_quadrant_and_position() {
        let (mut store, _) = store_on("2026-08-29");
        let d = day("2026-08-29");
        let u = store.add_task(d, "u", Quadrant::Schedule).unwrap();
        let t = store.add_task(d, "t", Quadrant::Do).unwrap();

        store.drag_over(d, &t.id, DragTarget::Task(&u.id));
        let tasks = store.tasks_for_day(d);
        assert_eq!(texts(tasks), vec!["u", "t"]);
        assert_eq!(store.find(&t.id).unwrap().quadrant, Quadrant::Schedule);
    }

    #[test]
    fn drag_end_commits_final_position() {
        let (mut store, _) = store_on("2026-08-29");
        let d = day("2026-08-29");
        let c = store.add_task(d, "c", Quadrant::Do).unwrap();
        store.add_task(d, "b", Quadrant::Do);
        let a = store.add_task(d, "a", Quadrant::Do).unwrap();

        store.drag_end(d, &a.id, &c.id);
        assert_eq!(texts(store.tasks_for_day(d)), vec!["b", "c", "a"]);
    }

    #[test]
    fn rollover_availability_requires_today_empty_and_yesterday_unfinished() {
        let (mut store, _) = store_on("2026-08-29");
        let today = day("2026-08-29");
        let yesterday = day("2026-08-28");

        assert!(!store.rollover_available(today));

        let t = store.add_task(yesterday, "left over", Quadrant::Do).unwrap();
        assert!(store.rollover_available(today));
        // Only offered when looking at today.
        assert!(!store.rollover_available(yesterday));

        store.add_task(today, "fresh", Quadrant::Do);
        assert!(!store.rollover_available(today));

        store.clear_completed(today);
        store.delete_task(&t.id);
        assert!(!store.rollover_available(today));
    }

    #[test]
    fn rollover_migrates_unfinished_in_order_without_streak() {
        let (mut store, _) = store_on("2026-08-29");
        let today = day("2026-08-29");
        let yesterday = day("2026-08-28");

        // Yesterday: [a(incomplete), b(complete), c(incomplete)]
        store.add_task(yesterday, "c", Quadrant::Delegate);
        let b = store.add_task(yesterday, "b", Quadrant::Do).unwrap();
        store.add_task(yesterday, "a", Quadrant::Do);
        store.toggle(&b.id);
        let streak_before = store.streak().clone();

        let carried = store.rollover();
        assert_eq!(carried, 2);
        assert_eq!(texts(store.tasks_for_day(today)), vec!["a", "c"]);
        assert_eq!(texts(store.tasks_for_day(yesterday)), vec!["b"]);
        assert!(store.tasks_for_day(today).iter().all(|t| !t.completed));
        assert_eq!(store.streak(), &streak_before);
    }

    #[test]
    fn rollover_gives_carried_tasks_fresh_ids() {
        let (mut store, _) = store_on("2026-08-29");
        let old = store
            .add_task(day("2026-08-28"), "x", Quadrant::Do)
            .unwrap();
        store.rollover();
        let migrated = &store.tasks_for_day(day("2026-08-29"))[0];
        assert_ne!(migrated.id, old.id);
        assert_eq!(migrated.quadrant, old.quadrant);
    }

    #[test]
    fn focus_order_sorts_by_quadrant_stably() {
        let (mut store, _) = store_on("2026-08-29");
        let d = day("2026-08-29");
        store.add_task(d, "e1", Quadrant::Eliminate);
        store.add_task(d, "d1", Quadrant::Do);
        store.add_task(d, "s1", Quadrant::Schedule);
        store.add_task(d, "d2", Quadrant::Do);
        // Bucket order: d2, s1, d1, e1

        let focused: Vec<&str> = store.focus_order(d).iter().map(|t| t.text.as_str()).collect();
        assert_eq!(focused, vec!["d2", "d1", "s1", "e1"]);
    }

    #[test]
    fn quadrant_view_and_urgent_count() {
        let (mut store, _) = store_on("2026-08-29");
        let d = day("2026-08-29");
        let a = store.add_task(d, "a", Quadrant::Do).unwrap();
        store.add_task(d, "b", Quadrant::Do);
        store.add_task(d, "c", Quadrant::Schedule);

        assert_eq!(store.tasks_by_quadrant(d, Quadrant::Do).len(), 2);
        assert_eq!(store.urgent_count(d), 2);
        store.toggle(&a.id);
        assert_eq!(store.urgent_count(d), 1);
    }

    #[test]
    fn preferences_round_trip_through_persistence() {
        let clock = FixedClock::new(Utc::now(), day("2026-08-29"));
        let kv = MemoryStore::default();

        {
            let mut store = TaskStore::load(Box::new(kv.clone()), Box::new(clock.clone()));
            store.set_muted(true);
            store.set_view_mode(ViewMode::Focus);
        }

        let store = TaskStore::load(Box::new(kv), Box::new(clock));
        assert!(store.muted());
        assert_eq!(store.view_mode(), ViewMode::Focus);
    }

    #[test]
    fn state_survives_reload() {
        let clock = FixedClock::new(Utc::now(), day("2026-08-29"));
        let d = day("2026-08-29");
        let kv = MemoryStore::default();
        {
            let mut store = TaskStore::load(Box::new(kv.clone()), Box::new(clock.clone()));
            let t = store.add_task(d, "persist me", Quadrant::Schedule).unwrap();
            store.toggle(&t.id);
        }

        let store = TaskStore::load(Box::new(kv), Box::new(clock));
        let tasks = store.tasks_for_day(d);
        assert_eq!(texts(tasks), vec!["persist me"]);
        assert!(tasks[0].completed);
        assert_eq!(store.streak().count, 1);
    }

    #[test]
    fn malformed_records_reset_to_defaults() {
        let mut kv = MemoryStore::default();
        kv.set(KEY_TASKS, "{not json").unwrap();
        kv.set(KEY_STREAK, "[]").unwrap();

        let clock = FixedClock::new(Utc::now(), day("2026-08-29"));
        let store = TaskStore::load(Box::new(kv), Box::new(clock));
        assert!(store.days().is_empty());
        assert_eq!(store.streak().count, 0);
    }
}
