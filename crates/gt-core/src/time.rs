//! Relative time rendering ("3 days", "1 hour").

use std::fmt;

use chrono::{DateTime, Duration, Utc};

/// Units used when describing elapsed time, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    const ALL: [Self; 7] = [
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::Day,
        Self::Week,
        Self::Month,
        Self::Year,
    ];

    /// Length of one unit in seconds. Months are 30 days and years 365.
    #[must_use]
    pub const fn seconds(self) -> i64 {
        match self {
            Self::Second => 1,
            Self::Minute => 60,
            Self::Hour => 3_600,
            Self::Day => 86_400,
            Self::Week => 604_800,
            Self::Month => 2_592_000,
            Self::Year => 31_536_000,
        }
    }

    #[must_use]
    pub const fn label(self, count: i64) -> &'static str {
        let singular = count == 1;
        match self {
            Self::Second if singular => "second",
            Self::Second => "seconds",
            Self::Minute if singular => "minute",
            Self::Minute => "minutes",
            Self::Hour if singular => "hour",
            Self::Hour => "hours",
            Self::Day if singular => "day",
            Self::Day => "days",
            Self::Week if singular => "week",
            Self::Week => "weeks",
            Self::Month if singular => "month",
            Self::Month => "months",
            Self::Year if singular => "year",
            Self::Year => "years",
        }
    }
}

/// Elapsed time expressed as a whole number of a single unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeAgo {
    pub time: i64,
    pub unit: TimeUnit,
}

impl TimeAgo {
    /// `"<time> <unit>"`, e.g. `"3 days"`.
    pub fn formatted(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TimeAgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.time, self.unit.label(self.time))
    }
}

/// Describes how long ago `then` was, relative to `now`.
///
/// Picks the largest unit, no larger than `max_unit`, of which at least one
/// whole unit has elapsed. Times in the future count as zero seconds.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>, max_unit: TimeUnit) -> TimeAgo {
    let elapsed = (now - then).num_seconds().max(0);

    let unit = TimeUnit::ALL
        .into_iter()
        .rev()
        .filter(|unit| *unit <= max_unit)
        .find(|unit| elapsed >= unit.seconds())
        .unwrap_or(TimeUnit::Second);

    TimeAgo {
        time: elapsed / unit.seconds(),
        unit,
    }
}

/// Whole days in `duration`, rounded down. Negative durations count as zero.
pub fn to_days(duration: Duration) -> i64 {
    duration.num_days().max(0)
}
