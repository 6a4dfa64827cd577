use chrono::NaiveDateTime;
use tracing::debug;
use uuid::Uuid;

use super::availability::AvailabilityChecker;
use super::conflict::ConflictDetector;
use crate::errors::BookingResult;
use crate::models::interval::Interval;
use crate::models::validation::{ScheduleValidation, Violation, ViolationKind};

/// Runs every check on a requested interval and collects all violations.
///
/// Checks do not short-circuit: a past booking that also falls on a break reports
/// both, and an inverted interval is still checked against the calendar and
/// existing appointments using its raw start and end.
pub struct ScheduleValidator<'a> {
    availability: AvailabilityChecker<'a>,
    conflicts: ConflictDetector<'a>,
}

impl<'a> ScheduleValidator<'a> {
    pub fn new(availability: AvailabilityChecker<'a>, conflicts: ConflictDetector<'a>) -> Self {
        Self {
            availability,
            conflicts,
        }
    }

    pub async fn validate(
        &self,
        staff_id: Uuid,
        start: NaiveDateTime,
        end: NaiveDateTime,
        exclude_id: Option<Uuid>,
        now: NaiveDateTime,
    ) -> BookingResult<ScheduleValidation> {
        let mut violations = Vec::new();

        if Interval::new(start, end).is_err() {
            violations.push(Violation::new(
                ViolationKind::InvalidInterval,
                "End time must be after start time",
            ));
        }

        if start < now {
            violations.push(Violation::new(
                ViolationKind::PastBooking,
                "Cannot book an appointment in the past",
            ));
        }

        let availability = self.availability.check(staff_id, start, end).await?;
        if let Some(reason) = availability.reason {
            violations.push(reason);
        }

        if let Some(conflict) = self
            .conflicts
            .find_conflict(staff_id, start, end, exclude_id)
            .await?
        {
            violations.push(conflict.to_violation());
        }

        let validation = ScheduleValidation::from_violations(violations);
        debug!(
            "Schedule validation: staff_id={}, start={}, end={}, valid={}, violations={}",
            staff_id,
            start,
            end,
            validation.valid,
            validation.violations.len()
        );
        Ok(validation)
    }
}
