//! Daily completion streak tracker.
//!
//! The streak counts consecutive calendar days with at least one
//! completion event. It is a pure function of the previous state and the
//! wall-clock day the completion happens on -- not the day bucket the
//! task lives in, so finishing a backdated task still counts toward
//! today's chain.
//!
//! Un-completing a task never decrements the count; the streak is a
//! ratchet over days practiced, not a live tally of checked boxes.

use serde::{Deserialize, Serialize};

use crate::day::DayId;

/// Streak state: the chain length and the last day that extended it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakInfo {
    /// Consecutive days with at least one completion
    pub count: u32,
    /// The most recent day a completion was recorded, if any
    #[serde(rename = "lastCompletionDate")]
    pub last_completion_date: Option<DayId>,
}

impl StreakInfo {
    /// Apply one completion event occurring on `today`.
    ///
    /// Returns the next state plus whether the count changed. Same-day
    /// repeats are idempotent; a completion the day after the last one
    /// (or the first ever) extends the chain; anything else restarts it
    /// at 1.
    pub fn record_completion(&self, today: DayId) -> (StreakInfo, bool) {
        if self.last_completion_date == Some(today) {
            return (self.clone(), false);
        }
        let count = if self.last_completion_date == Some(today.yesterday()) || self.count == 0 {
            self.count + 1
        } else {
            1
        };
        (
            StreakInfo {
                count,
                last_completion_date: Some(today),
            },
            true,
        )
    }

    /// Whether a completion has already been recorded today.
    pub fn completed_on(&self, day: DayId) -> bool {
        self.last_completion_date == Some(day)
    }

    /// Mascot growth stage derived from the chain length (1 through 3).
    pub fn growth_stage(&self) -> u8 {
        if self.count >= 7 {
            3
        } else if self.count >= 3 {
            2
        } else {
            1
        }
    }
}
