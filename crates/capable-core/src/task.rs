//! Task model: the task itself, its quadrant, and derived display state.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Age in days past which an incomplete task counts as gone cold.
const COLD_AGE_DAYS: f64 = 3.0;

/// One of the four Eisenhower categories a task belongs to.
///
/// Serialized names match the persisted records of the UI layer
/// (`"DO"`, `"SCHEDULE"`, `"DELEGATE"`, `"ELIMINATE"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Quadrant {
    /// Important & urgent -- do it now
    Do,
    /// Important & not urgent -- plan it
    Schedule,
    /// Urgent & not important -- hand it off
    Delegate,
    /// Neither -- minimize it
    Eliminate,
}

impl Quadrant {
    /// All quadrants in display order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::Do,
        Quadrant::Schedule,
        Quadrant::Delegate,
        Quadrant::Eliminate,
    ];

    /// Sort key for the linear focus view: Do first, Eliminate last.
    pub fn priority(&self) -> u8 {
        match self {
            Quadrant::Do => 0,
            Quadrant::Schedule => 1,
            Quadrant::Delegate => 2,
            Quadrant::Eliminate => 3,
        }
    }

    /// Urgency/importance title shown next to the quadrant.
    pub fn title(&self) -> &'static str {
        match self {
            Quadrant::Do => "Important & Urgent",
            Quadrant::Schedule => "Important & Not Urgent",
            Quadrant::Delegate => "Urgent & Not Important",
            Quadrant::Eliminate => "Not Important & Not Urgent",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quadrant::Do => "DO",
            Quadrant::Schedule => "SCHEDULE",
            Quadrant::Delegate => "DELEGATE",
            Quadrant::Eliminate => "ELIMINATE",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Quadrant {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "do" => Ok(Quadrant::Do),
            "schedule" => Ok(Quadrant::Schedule),
            "delegate" => Ok(Quadrant::Delegate),
            "eliminate" => Ok(Quadrant::Eliminate),
            _ => Err(CoreError::UnknownQuadrant(s.to_string())),
        }
    }
}

/// A single actionable item, always belonging to exactly one day bucket
/// and one quadrant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque unique identifier; generated at creation, never reused
    pub id: String,
    /// Display text; trimmed, never empty
    pub text: String,
    /// Whether the user has checked the task off
    pub completed: bool,
    /// The Eisenhower category
    pub quadrant: Quadrant,
    /// Creation instant; persisted as epoch milliseconds
    #[serde(rename = "createdAt", with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a fresh task with a new id. Callers are expected to have
    /// trimmed and rejected empty `text` already.
    pub fn new(text: impl Into<String>, quadrant: Quadrant, now: DateTime<Utc>) -> Self {
        Task {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            completed: false,
            quadrant,
            created_at: now,
        }
    }

    /// Age of the task in fractional days.
    pub fn age_days(&self, now: DateTime<Utc>) -> f64 {
        (now - self.created_at).num_milliseconds() as f64 / 86_400_000.0
    }

    /// Derived thermal classification for display. Hot wins over cold
    /// when both apply. Completed tasks are neutral.
    pub fn thermal(&self, now: DateTime<Utc>) -> Option<Thermal> {
        if self.completed {
            return None;
        }
        if self.quadrant == Quadrant::Do {
            Some(Thermal::Hot)
        } else if self.age_days(now) > COLD_AGE_DAYS {
            Some(Thermal::Cold)
        } else {
            None
        }
    }
}

/// Presentation-only urgency/age classification; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Thermal {
    /// Incomplete task in the Do quadrant
    Hot,
    /// Incomplete task older than the cold threshold
    Cold,
}

/// Which of the two layouts the UI shows; persisted as a preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ViewMode {
    /// Four-quadrant matrix
    Matrix,
    /// Linear focus list sorted by quadrant priority
    Focus,
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Matrix
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Matrix => write!(f, "MATRIX"),
            ViewMode::Focus => write!(f, "FOCUS"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "matrix" => Ok(ViewMode::Matrix),
            "focus" => Ok(ViewMode::Focus),
            _ => Err(CoreError::UnknownViewMode(s.to_string())),
        }
    }
}
