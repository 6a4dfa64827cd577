use chrono::NaiveDateTime;
use tracing::debug;
use uuid::Uuid;

use super::overlap::overlaps;
use crate::errors::BookingResult;
use crate::models::appointment::Appointment;
use crate::models::validation::Conflict;
use crate::store::AppointmentStore;

/// Finds live appointments that collide with a requested interval.
pub struct ConflictDetector<'a> {
    store: &'a dyn AppointmentStore,
}

impl<'a> ConflictDetector<'a> {
    pub fn new(store: &'a dyn AppointmentStore) -> Self {
        Self { store }
    }

    /// Returns the first conflicting appointment in store order, if any.
    ///
    /// `exclude_id` leaves out the appointment being retimed so it does not
    /// conflict with itself.
    pub async fn find_conflict(
        &self,
        staff_id: Uuid,
        start: NaiveDateTime,
        end: NaiveDateTime,
        exclude_id: Option<Uuid>,
    ) -> BookingResult<Option<Conflict>> {
        let live = self.store.find_live(staff_id, exclude_id).await?;
        let conflict = first_conflict(&live, start, end).map(Conflict::with);

        if let Some(c) = &conflict {
            debug!(
                "Conflict found: staff_id={}, requested={}..{}, existing={}",
                staff_id, start, end, c.appointment_id
            );
        }
        Ok(conflict)
    }
}

pub fn first_conflict(
    appointments: &[Appointment],
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Option<&Appointment> {
    appointments
        .iter()
        .filter(|existing| existing.is_live())
        .find(|existing| overlaps(existing.start_at, existing.end_at, start, end))
}
