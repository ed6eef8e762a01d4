//! # Capable Core Library
//!
//! This library provides the core business logic for Capable, a personal
//! task organizer built around the Eisenhower matrix. Tasks live in
//! per-calendar-day buckets; the library implements every mutation the
//! presentation layer can perform, while rendering (GUI/mascot) stays in
//! a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Task Store**: An explicitly owned in-memory store keyed by calendar
//!   day, loaded once at startup and written through to a key-value
//!   persistence capability after every mutation
//! - **Streak Tracker**: A pure state machine over consecutive-day
//!   completion chains, driven solely by completion events
//! - **Drag Engine**: Array-move based reordering and live cross-quadrant
//!   reclassification matching the drag-and-drop contract of the UI
//! - **Storage**: SQLite-backed string key-value table plus TOML-based
//!   configuration
//!
//! ## Key Components
//!
//! - [`TaskStore`]: The single owned store; all mutations go through it
//! - [`StreakInfo`]: Consecutive-day completion counter
//! - [`Clock`]: Injectable time source so day-sensitive logic is testable
//! - [`KvStore`]: The persistence capability the store consumes

pub mod clock;
pub mod day;
pub mod drag;
pub mod error;
pub mod events;
pub mod rollover;
pub mod storage;
pub mod store;
pub mod streak;
pub mod task;

pub use clock::{Clock, FixedClock, SystemClock};
pub use day::DayId;
pub use drag::DragTarget;
pub use error::{ConfigError, CoreError, StorageError};
pub use events::Event;
pub use rollover::{carry_unfinished, CarryOverResult};
pub use storage::{Config, Database, KvStore, MemoryStore};
pub use store::{DaySummary, TaskStore};
pub use streak::StreakInfo;
pub use task::{Quadrant, Task, Thermal, ViewMode};
