use chrono::{Datelike, NaiveDate};
use tracing::debug;
use uuid::Uuid;

use super::calendar::WorkingCalendar;
use super::overlap::overlaps;
use crate::errors::{BookingError, BookingResult};
use crate::models::appointment::Appointment;
use crate::models::interval::{minutes_since_midnight, minutes_to_time, time_to_minutes};
use crate::models::slot::Slot;
use crate::models::working_window::WorkingWindow;
use crate::store::AppointmentStore;

/// Distance between consecutive candidate start times, regardless of duration.
pub const SLOT_GRANULARITY_MINS: i64 = 30;

/// Enumerates bookable start times for one staff member on one date.
pub struct SlotGenerator<'a> {
    calendar: WorkingCalendar<'a>,
    appointments: &'a dyn AppointmentStore,
}

impl<'a> SlotGenerator<'a> {
    pub fn new(calendar: WorkingCalendar<'a>, appointments: &'a dyn AppointmentStore) -> Self {
        Self {
            calendar,
            appointments,
        }
    }

    /// Slots are recomputed from the stores on every call. A day off, or a day with
    /// nothing left, yields an empty list.
    pub async fn generate(
        &self,
        staff_id: Uuid,
        date: NaiveDate,
        duration_mins: u32,
    ) -> BookingResult<Vec<Slot>> {
        if duration_mins == 0 {
            return Err(BookingError::Validation(
                "Duration must be at least one minute".to_string(),
            ));
        }

        let Some(window) = self.calendar.resolve(staff_id, date.weekday()).await? else {
            return Ok(Vec::new());
        };

        let booked = self.appointments.find_live_on_date(staff_id, date).await?;
        let busy = busy_minutes(date, &booked);
        let slots = bookable_slots(&window, &busy, duration_mins);

        debug!(
            "Generated slots: staff_id={}, date={}, duration={}, booked={}, slots={}",
            staff_id,
            date,
            duration_mins,
            booked.len(),
            slots.len()
        );
        Ok(slots)
    }
}

/// Live appointments as `(start, end)` minute offsets from `date`'s midnight.
fn busy_minutes(date: NaiveDate, appointments: &[Appointment]) -> Vec<(i64, i64)> {
    appointments
        .iter()
        .filter(|a| a.is_live())
        .map(|a| {
            (
                minutes_since_midnight(date, a.start_at),
                minutes_since_midnight(date, a.end_at),
            )
        })
        .collect()
}

/// Walks candidate starts from the window opening to the last start that still
/// ends by closing time, in [`SLOT_GRANULARITY_MINS`] steps, and keeps the ones
/// clear of the break and of every busy span.
pub fn bookable_slots(window: &WorkingWindow, busy: &[(i64, i64)], duration_mins: u32) -> Vec<Slot> {
    let duration = i64::from(duration_mins);
    let open = time_to_minutes(window.start_time());
    let close = time_to_minutes(window.end_time());
    let pause = window
        .break_period()
        .map(|b| (time_to_minutes(b.start), time_to_minutes(b.end)));

    let mut slots = Vec::new();
    let mut slot_start = open;
    let last_start = close - duration;

    while slot_start <= last_start {
        let slot_end = slot_start + duration;

        let on_break = pause.is_some_and(|(bs, be)| overlaps(bs, be, slot_start, slot_end));
        let taken = busy
            .iter()
            .any(|&(s, e)| overlaps(s, e, slot_start, slot_end));

        if !on_break && !taken {
            if let (Some(start_time), Some(end_time)) =
                (minutes_to_time(slot_start), minutes_to_time(slot_end))
            {
                slots.push(Slot {
                    start_time,
                    end_time,
                });
            }
        }

        slot_start += SLOT_GRANULARITY_MINS;
    }

    slots
}
