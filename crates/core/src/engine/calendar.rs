use chrono::Weekday;
use tracing::debug;
use uuid::Uuid;

use crate::errors::BookingResult;
use crate::models::working_window::WorkingWindow;
use crate::store::CalendarStore;

/// Read-only view of staff working hours.
pub struct WorkingCalendar<'a> {
    store: &'a dyn CalendarStore,
}

impl<'a> WorkingCalendar<'a> {
    pub fn new(store: &'a dyn CalendarStore) -> Self {
        Self { store }
    }

    /// `None` means the staff member does not work on `weekday`.
    pub async fn resolve(
        &self,
        staff_id: Uuid,
        weekday: Weekday,
    ) -> BookingResult<Option<WorkingWindow>> {
        let window = self.store.find_window(staff_id, weekday).await?;
        debug!(
            "Resolved working window: staff_id={}, weekday={}, found={}",
            staff_id,
            weekday,
            window.is_some()
        );
        Ok(window)
    }
}
