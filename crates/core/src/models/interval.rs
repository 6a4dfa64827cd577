use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

use crate::errors::{BookingError, BookingResult};

/// Half-open `[start, end)` span of local wall-clock time.
///
/// Construction fails when `start >= end`, so every `Interval` in hand is non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interval {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl Interval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> BookingResult<Self> {
        if start >= end {
            return Err(BookingError::Validation(format!(
                "Interval start {} must be before end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }
}

/// `start + duration_mins`, or a validation error when the result falls outside
/// the representable date range.
pub fn calculate_end_time(start: NaiveDateTime, duration_mins: u32) -> BookingResult<NaiveDateTime> {
    start
        .checked_add_signed(Duration::minutes(i64::from(duration_mins)))
        .ok_or_else(|| {
            BookingError::Validation(format!(
                "End time of a {} minute appointment starting at {} is out of range",
                duration_mins, start
            ))
        })
}

/// True when `end` falls on a different calendar date than `start`.
pub fn crosses_midnight(start: NaiveDateTime, end: NaiveDateTime) -> bool {
    end.date() != start.date()
}

/// Time of day, truncated to the minute.
pub fn clock_time(at: NaiveDateTime) -> NaiveTime {
    let time = at.time();
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

/// `[date 00:00:00.000, date 23:59:59.999]`, both ends inclusive.
pub fn day_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let first = date.and_time(NaiveTime::MIN);
    let last = date.and_hms_milli_opt(23, 59, 59, 999).unwrap_or(first);
    (first, last)
}

/// Minutes elapsed between `date`'s midnight and `at`.
///
/// Values past 1440 mean `at` lies on a following day.
pub fn minutes_since_midnight(date: NaiveDate, at: NaiveDateTime) -> i64 {
    (at - date.and_time(NaiveTime::MIN)).num_minutes()
}

pub fn time_to_minutes(time: NaiveTime) -> i64 {
    i64::from(time.num_seconds_from_midnight() / 60)
}

pub fn minutes_to_time(minutes: i64) -> Option<NaiveTime> {
    let seconds = u32::try_from(minutes.checked_mul(60)?).ok()?;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
}
