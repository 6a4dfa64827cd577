use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};

/// Lifecycle state of an appointment.
///
/// Only [`Pending`](Self::Pending) and [`Confirmed`](Self::Confirmed) are live; the
/// other three are terminal and never block a staff member's calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    NoShow,
}

impl AppointmentStatus {
    pub const LIVE: [AppointmentStatus; 2] = [AppointmentStatus::Pending, AppointmentStatus::Confirmed];

    pub fn is_live(self) -> bool {
        Self::LIVE.contains(&self)
    }

    /// Storage representation, as written to the `appointments.status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::NoShow => "no_show",
        }
    }

    /// Applies a lifecycle action, returning the resulting status.
    ///
    /// ```text
    /// PENDING   --confirm-->  CONFIRMED
    /// PENDING   --cancel--->  CANCELLED
    /// CONFIRMED --cancel--->  CANCELLED
    /// CONFIRMED --complete->  COMPLETED
    /// CONFIRMED --no_show-->  NO_SHOW
    /// ```
    pub fn apply(self, action: StatusAction) -> BookingResult<AppointmentStatus> {
        use AppointmentStatus as S;

        match (self, action) {
            (S::Pending, StatusAction::Confirm) => Ok(S::Confirmed),
            (S::Pending | S::Confirmed, StatusAction::Cancel) => Ok(S::Cancelled),
            (S::Confirmed, StatusAction::Complete) => Ok(S::Completed),
            (S::Confirmed, StatusAction::NoShow) => Ok(S::NoShow),
            (status, action) => Err(BookingError::InvalidTransition { status, action }),
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(AppointmentStatus::Pending),
            "confirmed" => Ok(AppointmentStatus::Confirmed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            "completed" => Ok(AppointmentStatus::Completed),
            "no_show" => Ok(AppointmentStatus::NoShow),
            other => Err(BookingError::Validation(format!(
                "Unknown appointment status: {}",
                other
            ))),
        }
    }
}

/// Staff or customer action that moves an appointment through its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusAction {
    Confirm,
    Cancel,
    Complete,
    NoShow,
}

impl fmt::Display for StatusAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            StatusAction::Confirm => "confirm",
            StatusAction::Cancel => "cancel",
            StatusAction::Complete => "complete",
            StatusAction::NoShow => "mark as no-show",
        };
        f.write_str(verb)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub staff_id: Uuid,
    pub service_id: Uuid,
    pub customer_id: Uuid,
    pub service_name: String,
    pub customer_name: String,
    /// Inclusive start of the half-open `[start_at, end_at)` interval.
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    pub fn is_live(&self) -> bool {
        self.status.is_live()
    }
}

/// An appointment that has passed validation and is about to be persisted.
///
/// New appointments always start out [`AppointmentStatus::Pending`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub staff_id: Uuid,
    pub service_id: Uuid,
    pub customer_id: Uuid,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub staff_id: Uuid,
    pub service_id: Uuid,
    pub customer_id: Uuid,
    pub start: NaiveDateTime,
    /// Service duration in minutes.
    pub duration: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeStatusRequest {
    pub action: StatusAction,
}
