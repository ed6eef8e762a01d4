//! Signals the store emits for the presentation layer.
//!
//! Every observable state change queues an Event; the UI drains the
//! queue after invoking an operation and decides how to react (sound,
//! celebration, warning toast). The core never dictates the reaction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::Quadrant;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A task transitioned incomplete -> complete.
    TaskCompleted {
        quadrant: Quadrant,
        age_days: f64,
        at: DateTime<Utc>,
    },
    /// A task transitioned complete -> incomplete. No streak effect.
    TaskUncompleted {
        at: DateTime<Utc>,
    },
    /// A completion extended or restarted the streak chain.
    StreakIncremented {
        count: u32,
        at: DateTime<Utc>,
    },
    /// Yesterday's unfinished tasks were migrated into today.
    RolloverApplied {
        carried: usize,
        at: DateTime<Utc>,
    },
    /// Completed tasks were removed from a day bucket.
    CompletedCleared {
        removed: usize,
        at: DateTime<Utc>,
    },
    /// A persistence write failed; in-memory state is still authoritative.
    StorageWarning {
        record: String,
        message: String,
        at: DateTime<Utc>,
    },
}
