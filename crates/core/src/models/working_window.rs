use chrono::{NaiveTime, Weekday};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};

/// Optional pause inside a working window, e.g. a lunch break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreakPeriod {
    #[serde(with = "crate::models::slot::hhmm")]
    pub start: NaiveTime,
    #[serde(with = "crate::models::slot::hhmm")]
    pub end: NaiveTime,
}

/// Declared working hours of one staff member on one weekday.
///
/// Invariants, checked by [`WorkingWindow::new`]:
/// - `start_time < end_time`
/// - with a break, `start_time <= break.start < break.end <= end_time`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkingWindow {
    staff_id: Uuid,
    weekday: Weekday,
    #[serde(with = "crate::models::slot::hhmm")]
    start_time: NaiveTime,
    #[serde(with = "crate::models::slot::hhmm")]
    end_time: NaiveTime,
    #[serde(rename = "break")]
    break_period: Option<BreakPeriod>,
}

impl WorkingWindow {
    pub fn new(
        staff_id: Uuid,
        weekday: Weekday,
        start_time: NaiveTime,
        end_time: NaiveTime,
        break_period: Option<BreakPeriod>,
    ) -> BookingResult<Self> {
        if start_time >= end_time {
            return Err(BookingError::Validation(format!(
                "Working hours must start before they end ({} - {})",
                start_time.format("%H:%M"),
                end_time.format("%H:%M")
            )));
        }

        if let Some(b) = break_period {
            let inside = start_time <= b.start && b.start < b.end && b.end <= end_time;
            if !inside {
                return Err(BookingError::Validation(format!(
                    "Break {} - {} must lie within working hours {} - {}",
                    b.start.format("%H:%M"),
                    b.end.format("%H:%M"),
                    start_time.format("%H:%M"),
                    end_time.format("%H:%M")
                )));
            }
        }

        Ok(Self {
            staff_id,
            weekday,
            start_time,
            end_time,
            break_period,
        })
    }

    /// Builds a window from stored columns, where a break is only present when
    /// both of its ends are.
    pub fn from_parts(
        staff_id: Uuid,
        weekday: Weekday,
        start_time: NaiveTime,
        end_time: NaiveTime,
        break_start: Option<NaiveTime>,
        break_end: Option<NaiveTime>,
    ) -> BookingResult<Self> {
        let break_period = match (break_start, break_end) {
            (Some(start), Some(end)) => Some(BreakPeriod { start, end }),
            (None, None) => None,
            _ => {
                return Err(BookingError::Validation(
                    "Break must have both a start and an end".to_string(),
                ));
            }
        };
        Self::new(staff_id, weekday, start_time, end_time, break_period)
    }

    pub fn staff_id(&self) -> Uuid {
        self.staff_id
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    pub fn break_period(&self) -> Option<BreakPeriod> {
        self.break_period
    }
}

/// Weekday number as stored: 0 = Sunday through 6 = Saturday.
pub fn weekday_index(weekday: Weekday) -> i16 {
    weekday.num_days_from_sunday() as i16
}

pub fn weekday_from_index(index: i16) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}
