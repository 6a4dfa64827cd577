use std::str::FromStr;

use bookwell_core::errors::{BookingError, BookingResult};
use bookwell_core::models::appointment::{Appointment, AppointmentStatus};
use bookwell_core::models::working_window::{weekday_from_index, WorkingWindow};
use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Appointment row joined with its service and customer names.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: Uuid,
    pub staff_id: Uuid,
    pub service_id: Uuid,
    pub customer_id: Uuid,
    pub service_name: String,
    pub customer_name: String,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWorkingHours {
    pub staff_id: Uuid,
    pub weekday: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub break_start: Option<NaiveTime>,
    pub break_end: Option<NaiveTime>,
}

impl TryFrom<DbAppointment> for Appointment {
    type Error = BookingError;

    fn try_from(row: DbAppointment) -> BookingResult<Self> {
        Ok(Appointment {
            id: row.id,
            staff_id: row.staff_id,
            service_id: row.service_id,
            customer_id: row.customer_id,
            service_name: row.service_name,
            customer_name: row.customer_name,
            start_at: row.start_at,
            end_at: row.end_at,
            status: AppointmentStatus::from_str(&row.status)?,
            created_at: row.created_at,
        })
    }
}

impl TryFrom<DbWorkingHours> for WorkingWindow {
    type Error = BookingError;

    fn try_from(row: DbWorkingHours) -> BookingResult<Self> {
        let weekday = weekday_from_index(row.weekday).ok_or_else(|| {
            BookingError::Validation(format!("Invalid weekday number: {}", row.weekday))
        })?;

        WorkingWindow::from_parts(
            row.staff_id,
            weekday,
            row.start_time,
            row.end_time,
            row.break_start,
            row.break_end,
        )
    }
}
