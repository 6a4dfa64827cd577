use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::appointment::Appointment;

/// The six ways a requested interval can be refused.
///
/// These are ordinary outcomes shown to the user, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    InvalidInterval,
    PastBooking,
    NoWorkingWindow,
    OutsideWorkingHours,
    BreakConflict,
    AppointmentConflict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of checking an interval against the staff member's working calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Violation>,
}

impl Availability {
    pub fn available() -> Self {
        Self {
            available: true,
            reason: None,
        }
    }

    pub fn unavailable(reason: Violation) -> Self {
        Self {
            available: false,
            reason: Some(reason),
        }
    }
}

/// An existing live appointment that overlaps a requested interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    pub appointment_id: Uuid,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
    pub service_name: String,
    pub customer_name: String,
    pub message: String,
}

impl Conflict {
    pub fn with(appointment: &Appointment) -> Self {
        let message = format!(
            "Conflicts with an existing appointment from {} to {} ({} with {})",
            appointment.start_at.format("%H:%M"),
            appointment.end_at.format("%H:%M"),
            appointment.service_name,
            appointment.customer_name
        );

        Self {
            appointment_id: appointment.id,
            start_at: appointment.start_at,
            end_at: appointment.end_at,
            service_name: appointment.service_name.clone(),
            customer_name: appointment.customer_name.clone(),
            message,
        }
    }

    pub fn to_violation(&self) -> Violation {
        Violation::new(ViolationKind::AppointmentConflict, self.message.clone())
    }
}

/// Accumulated outcome of validating a requested interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleValidation {
    pub valid: bool,
    pub violations: Vec<Violation>,
}

impl ScheduleValidation {
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        Self {
            valid: violations.is_empty(),
            violations,
        }
    }

    pub fn has(&self, kind: ViolationKind) -> bool {
        self.violations.iter().any(|v| v.kind == kind)
    }

    pub fn kinds(&self) -> Vec<ViolationKind> {
        self.violations.iter().map(|v| v.kind).collect()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.message.as_str()).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateScheduleRequest {
    pub staff_id: Uuid,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub exclude_appointment_id: Option<Uuid>,
}
