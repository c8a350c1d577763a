//! Countdown arithmetic between a fixed target instant and the current time.

use std::fmt;

use chrono::{DateTime, Local, LocalResult, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;

use crate::domain::AppError;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Immutable point in time the countdown runs toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TargetInstant(DateTime<Utc>);

impl TargetInstant {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Parse an RFC 3339 timestamp, or a naive date-time interpreted in the local time zone.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        Self::parse_in(value, &Local)
    }

    /// Parse like [`TargetInstant::parse`], resolving naive values in `zone`.
    pub fn parse_in<Tz: TimeZone>(value: &str, zone: &Tz) -> Result<Self, AppError> {
        let trimmed = value.trim();
        if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(instant.with_timezone(&Utc)));
        }

        let naive = NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
            .ok_or_else(|| AppError::InvalidInstant {
                value: value.to_string(),
                reason: "expected RFC 3339 or YYYY-MM-DDTHH:MM[:SS]".to_string(),
            })?;

        match zone.from_local_datetime(&naive) {
            LocalResult::Single(instant) | LocalResult::Ambiguous(instant, _) => {
                Ok(Self(instant.with_timezone(&Utc)))
            }
            LocalResult::None => Err(AppError::InvalidInstant {
                value: value.to_string(),
                reason: "local time does not exist in this time zone".to_string(),
            }),
        }
    }

    pub fn as_utc(&self) -> DateTime<Utc> {
        self.0
    }

    /// Countdown reading as seen from `now`.
    pub fn countdown_from(&self, now: DateTime<Utc>) -> Countdown {
        let diff_ms = (self.0 - now).num_milliseconds();
        if diff_ms <= 0 {
            return Countdown::Elapsed;
        }
        Countdown::Running(TimeRemaining::from_millis(diff_ms))
    }
}

/// Remaining duration broken into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TimeRemaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeRemaining {
    pub const ZERO: TimeRemaining = TimeRemaining { days: 0, hours: 0, minutes: 0, seconds: 0 };

    /// Break a millisecond difference into days/hours/minutes/seconds.
    ///
    /// Negative input clamps to [`TimeRemaining::ZERO`].
    pub fn from_millis(millis: i64) -> Self {
        if millis <= 0 {
            return Self::ZERO;
        }
        let millis = millis as u64;
        Self {
            days: millis / MS_PER_DAY as u64,
            hours: (millis / MS_PER_HOUR as u64) % 24,
            minutes: (millis / MS_PER_MINUTE as u64) % 60,
            seconds: (millis / MS_PER_SECOND as u64) % 60,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}d {:02}h {:02}m {:02}s", self.days, self.hours, self.minutes, self.seconds)
    }
}

/// One reading of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Countdown {
    Running(TimeRemaining),
    Elapsed,
}

impl Countdown {
    pub fn is_elapsed(&self) -> bool {
        matches!(self, Countdown::Elapsed)
    }

    /// Breakdown to display; elapsed readings show all zeros.
    pub fn remaining(&self) -> TimeRemaining {
        match self {
            Countdown::Running(remaining) => *remaining,
            Countdown::Elapsed => TimeRemaining::ZERO,
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::Running(remaining) => write!(f, "{}", remaining),
            Countdown::Elapsed => write!(f, "{} (the day has arrived)", TimeRemaining::ZERO),
        }
    }
}
