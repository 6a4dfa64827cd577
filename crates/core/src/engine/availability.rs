use chrono::{Datelike, NaiveDateTime, Weekday};
use tracing::debug;
use uuid::Uuid;

use super::calendar::WorkingCalendar;
use super::overlap::overlaps;
use crate::errors::BookingResult;
use crate::models::interval::{clock_time, crosses_midnight};
use crate::models::validation::{Availability, Violation, ViolationKind};
use crate::models::working_window::WorkingWindow;

/// Checks a requested interval against the staff member's working window and break.
///
/// The window is resolved from the weekday of `start`, so a day off is reported
/// even when `end` does not come after `start`.
pub struct AvailabilityChecker<'a> {
    calendar: WorkingCalendar<'a>,
}

impl<'a> AvailabilityChecker<'a> {
    pub fn new(calendar: WorkingCalendar<'a>) -> Self {
        Self { calendar }
    }

    pub async fn check(
        &self,
        staff_id: Uuid,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> BookingResult<Availability> {
        let weekday = start.weekday();
        let window = self.calendar.resolve(staff_id, weekday).await?;
        let availability = check_window(window.as_ref(), weekday, start, end);

        debug!(
            "Availability check: staff_id={}, start={}, end={}, available={}",
            staff_id, start, end, availability.available
        );
        Ok(availability)
    }
}

/// Pure decision behind [`AvailabilityChecker::check`].
///
/// Times are compared at minute precision. An interval that ends on a different
/// date than it starts can never fit a single-day window.
pub fn check_window(
    window: Option<&WorkingWindow>,
    weekday: Weekday,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Availability {
    let Some(window) = window else {
        return Availability::unavailable(Violation::new(
            ViolationKind::NoWorkingWindow,
            format!("Staff member does not work on {}", weekday_name(weekday)),
        ));
    };

    let clock_start = clock_time(start);
    let clock_end = clock_time(end);

    if crosses_midnight(start, end)
        || clock_start < window.start_time()
        || clock_end > window.end_time()
    {
        return Availability::unavailable(Violation::new(
            ViolationKind::OutsideWorkingHours,
            format!(
                "Requested time is outside working hours ({} - {})",
                window.start_time().format("%H:%M"),
                window.end_time().format("%H:%M")
            ),
        ));
    }

    if let Some(pause) = window.break_period() {
        if overlaps(pause.start, pause.end, clock_start, clock_end) {
            return Availability::unavailable(Violation::new(
                ViolationKind::BreakConflict,
                format!(
                    "Requested time overlaps the break ({} - {})",
                    pause.start.format("%H:%M"),
                    pause.end.format("%H:%M")
                ),
            ));
        }
    }

    Availability::available()
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
