//! PostgreSQL implementations of the engine's store traits.

use async_trait::async_trait;
use bookwell_core::errors::BookingResult;
use bookwell_core::models::appointment::{Appointment, AppointmentStatus, NewAppointment};
use bookwell_core::models::working_window::WorkingWindow;
use bookwell_core::store::{AppointmentStore, CalendarStore};
use chrono::{NaiveDate, Weekday};
use eyre::WrapErr;
use uuid::Uuid;

use crate::models::DbAppointment;
use crate::repositories::{appointment, working_hours};
use crate::DbPool;

#[derive(Clone)]
pub struct PgAppointmentStore {
    pool: DbPool,
}

impl PgAppointmentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn into_appointments(rows: Vec<DbAppointment>) -> BookingResult<Vec<Appointment>> {
    rows.into_iter().map(Appointment::try_from).collect()
}

#[async_trait]
impl AppointmentStore for PgAppointmentStore {
    async fn find_live(
        &self,
        staff_id: Uuid,
        exclude_id: Option<Uuid>,
    ) -> BookingResult<Vec<Appointment>> {
        let rows = appointment::get_live_appointments(&self.pool, staff_id, exclude_id)
            .await
            .wrap_err("Failed to load live appointments")?;
        into_appointments(rows)
    }

    async fn find_live_on_date(
        &self,
        staff_id: Uuid,
        date: NaiveDate,
    ) -> BookingResult<Vec<Appointment>> {
        let rows = appointment::get_live_appointments_on_date(&self.pool, staff_id, date)
            .await
            .wrap_err_with(|| format!("Failed to load appointments on {}", date))?;
        into_appointments(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> BookingResult<Option<Appointment>> {
        appointment::get_appointment_by_id(&self.pool, id)
            .await
            .wrap_err("Failed to load appointment")?
            .map(Appointment::try_from)
            .transpose()
    }

    async fn insert(&self, new: NewAppointment) -> BookingResult<Appointment> {
        let row = appointment::create_appointment(
            &self.pool,
            new.staff_id,
            new.service_id,
            new.customer_id,
            new.start_at,
            new.end_at,
        )
        .await
        .wrap_err("Failed to insert appointment")?;
        Appointment::try_from(row)
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: AppointmentStatus,
    ) -> BookingResult<Appointment> {
        let row = appointment::update_appointment_status(&self.pool, id, status)
            .await
            .wrap_err("Failed to update appointment status")?;
        Appointment::try_from(row)
    }
}

#[derive(Clone)]
pub struct PgCalendarStore {
    pool: DbPool,
}

impl PgCalendarStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CalendarStore for PgCalendarStore {
    async fn find_window(
        &self,
        staff_id: Uuid,
        weekday: Weekday,
    ) -> BookingResult<Option<WorkingWindow>> {
        working_hours::get_working_hours(&self.pool, staff_id, weekday)
            .await
            .wrap_err("Failed to load working hours")?
            .map(WorkingWindow::try_from)
            .transpose()
    }
}
