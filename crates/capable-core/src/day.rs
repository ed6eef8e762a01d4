//! Calendar-day identifiers.
//!
//! A [`DayId`] names one local calendar day and is the sole partition key
//! of the task store. It serializes as a `YYYY-MM-DD` string. Day
//! identifiers for "now" must always be derived from the local wall
//! clock, never by truncating a UTC timestamp -- otherwise the bucket can
//! land on the wrong day for users east or west of Greenwich.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One local calendar day, the key of a day bucket.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DayId(NaiveDate);

impl DayId {
    /// Build a day identifier from an already-localized date.
    pub fn from_date(date: NaiveDate) -> Self {
        DayId(date)
    }

    /// The underlying date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The day `days` away from this one (negative for the past).
    pub fn offset_days(&self, days: i64) -> DayId {
        self.0
            .checked_add_signed(Duration::days(days))
            .map(DayId)
            .unwrap_or(*self)
    }

    /// The previous calendar day.
    pub fn yesterday(&self) -> DayId {
        self.offset_days(-1)
    }

    /// The next calendar day.
    pub fn tomorrow(&self) -> DayId {
        self.offset_days(1)
    }
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DayId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(DayId)
            .map_err(|_| CoreError::InvalidDay {
                value: s.to_string(),
            })
    }
}
