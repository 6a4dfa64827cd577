use async_trait::async_trait;
use bookwell_core::errors::BookingResult;
use bookwell_core::models::appointment::{Appointment, AppointmentStatus, NewAppointment};
use bookwell_core::models::working_window::WorkingWindow;
use bookwell_core::store::{AppointmentStore, CalendarStore};
use chrono::{NaiveDate, Weekday};
use mockall::mock;
use uuid::Uuid;

// Mock stores for testing
mock! {
    pub AppointmentRepo {}

    #[async_trait]
    impl AppointmentStore for AppointmentRepo {
        async fn find_live(
            &self,
            staff_id: Uuid,
            exclude_id: Option<Uuid>,
        ) -> BookingResult<Vec<Appointment>>;

        async fn find_live_on_date(
            &self,
            staff_id: Uuid,
            date: NaiveDate,
        ) -> BookingResult<Vec<Appointment>>;

        async fn find_by_id(&self, id: Uuid) -> BookingResult<Option<Appointment>>;

        async fn insert(&self, appointment: NewAppointment) -> BookingResult<Appointment>;

        async fn update_status(
            &self,
            id: Uuid,
            status: AppointmentStatus,
        ) -> BookingResult<Appointment>;
    }
}

mock! {
    pub CalendarRepo {}

    #[async_trait]
    impl CalendarStore for CalendarRepo {
        async fn find_window(
            &self,
            staff_id: Uuid,
            weekday: Weekday,
        ) -> BookingResult<Option<WorkingWindow>>;
    }
}
