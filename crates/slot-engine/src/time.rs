//! Minute-of-day time ranges.
//!
//! [`TimeRange`] is the interval vocabulary of the whole crate: a half-open
//! `[start, end)` span of minutes within a single day, where minute 0 is
//! midnight and minute 1440 is the exclusive end-of-day bound.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// A half-open interval of minutes within one day.
///
/// Invariant: `0 <= start < end <= 1440`. Ranges are `Copy` value objects with
/// a total order by `(start, end)`; they are created freely and never mutated.
///
/// The asserting constructors panic on invariant violations — malformed ranges
/// are a programming error in the caller, not a recoverable condition. Input
/// paths that handle untrusted data should go through [`TimeRange::try_from_start_end`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
    start: u32,
    end: u32,
}

/// Deserialization shadow — routes serde input through the range invariant.
#[derive(Deserialize)]
struct RawTimeRange {
    start: u32,
    end: u32,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = SlotError;

    fn try_from(raw: RawTimeRange) -> Result<Self> {
        Self::try_from_start_end(raw.start, raw.end)
    }
}

impl TimeRange {
    /// First minute of the day (inclusive).
    pub const START_OF_DAY: u32 = 0;

    /// One past the last minute of the day (exclusive).
    pub const END_OF_DAY: u32 = 1440;

    /// The entire day, `[0, 1440)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: Self::START_OF_DAY,
        end: Self::END_OF_DAY,
    };

    /// Creates the half-open range `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics unless `start < end` and `end <= 1440`.
    pub fn from_start_end(start: u32, end: u32) -> Self {
        assert!(
            start < end && end <= Self::END_OF_DAY,
            "invalid time range [{start}, {end})"
        );
        Self { start, end }
    }

    /// Creates the range `[start, end]`, i.e. `[start, end + 1)`.
    ///
    /// Used by callers that think in inclusive terms, such as "until 23:59":
    /// `from_start_end_inclusive(s, 1439)` reaches the end of the day.
    ///
    /// # Panics
    ///
    /// Panics unless `start <= end` and `end < 1440`.
    pub fn from_start_end_inclusive(start: u32, end: u32) -> Self {
        Self::from_start_end(start, end + 1)
    }

    /// Creates the range `[start, start + duration)`.
    ///
    /// # Panics
    ///
    /// Panics unless `duration > 0` and the range fits within the day.
    pub fn from_start_duration(start: u32, duration: u32) -> Self {
        Self::from_start_end(start, start + duration)
    }

    /// Validating counterpart of [`TimeRange::from_start_end`].
    ///
    /// Returns [`SlotError::InvalidRange`] instead of panicking; this is the
    /// entry point for deserialization and other untrusted input.
    pub fn try_from_start_end(start: u32, end: u32) -> Result<Self> {
        if start < end && end <= Self::END_OF_DAY {
            Ok(Self { start, end })
        } else {
            Err(SlotError::InvalidRange { start, end })
        }
    }

    /// Converts a wall-clock time to its minute-of-day offset.
    ///
    /// Accepts `24:00` as the exclusive end-of-day bound; rejects any other
    /// out-of-range clock value.
    pub fn minute_of_day(hours: u32, minutes: u32) -> Result<u32> {
        let valid = (hours < 24 && minutes < 60) || (hours == 24 && minutes == 0);
        if valid {
            Ok(hours * 60 + minutes)
        } else {
            Err(SlotError::InvalidClockTime { hours, minutes })
        }
    }

    /// Builds a range from two `chrono` wall-clock times on the same day.
    ///
    /// Seconds are truncated. A midnight `end` means "until the end of the
    /// day" and maps to the exclusive 1440 bound.
    ///
    /// # Panics
    ///
    /// Panics if the resulting range would be empty (`start >= end` after
    /// truncation, with a non-midnight `end`).
    pub fn from_naive_times(start: NaiveTime, end: NaiveTime) -> Self {
        let start = start.hour() * 60 + start.minute();
        let end = match end.hour() * 60 + end.minute() {
            0 => Self::END_OF_DAY,
            minutes => minutes,
        };
        Self::from_start_end(start, end)
    }

    /// Inclusive start minute.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Exclusive end minute.
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Length of the range in minutes. Always positive.
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` if `other` lies entirely within this range.
    pub fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns `true` if the given minute lies within this range.
    pub fn contains_minute(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }

    /// Returns `true` if the two ranges share at least one minute.
    ///
    /// Adjacent ranges (one ends exactly where the other starts) do NOT
    /// overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
