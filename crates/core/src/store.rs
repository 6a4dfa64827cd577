//! Storage ports consumed by the engine.
//!
//! The engine only reads through these traits (plus `insert`/`update_status` for
//! booking and lifecycle changes). PostgreSQL implementations live in
//! `bookwell-db`; [`crate::memory::InMemoryStore`] backs tests.

use async_trait::async_trait;
use chrono::{NaiveDate, Weekday};
use uuid::Uuid;

use crate::errors::BookingResult;
use crate::models::appointment::{Appointment, AppointmentStatus, NewAppointment};
use crate::models::working_window::WorkingWindow;

#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// Live (pending or confirmed) appointments of a staff member, optionally
    /// leaving out the appointment being edited. Ordering is unspecified.
    async fn find_live(
        &self,
        staff_id: Uuid,
        exclude_id: Option<Uuid>,
    ) -> BookingResult<Vec<Appointment>>;

    /// Live appointments of a staff member starting within
    /// `[date 00:00:00.000, date 23:59:59.999]`.
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

#[async_trait]
pub trait CalendarStore: Send + Sync {
    async fn find_window(
        &self,
        staff_id: Uuid,
        weekday: Weekday,
    ) -> BookingResult<Option<WorkingWindow>>;
}
