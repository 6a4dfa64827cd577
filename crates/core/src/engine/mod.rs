//! # Availability Engine
//!
//! Components, leaves first:
//!
//! - [`calendar::WorkingCalendar`]: resolves a staff member's hours for a weekday
//! - [`availability::AvailabilityChecker`]: interval inside working hours, outside the break
//! - [`conflict::ConflictDetector`]: interval clear of live appointments
//! - [`validator::ScheduleValidator`]: all of the above, violations accumulated
//! - [`slots::SlotGenerator`]: bookable 30-minute-step start times for a date
//!
//! [`BookingEngine`] wires them to injected stores and is what callers hold.
//!
//! ## Concurrency
//!
//! The engine reads, decides, and (for bookings) writes without taking any lock.
//! Two concurrent bookings for the same staff member can both pass validation
//! unless the caller serializes them, e.g. with a per-staff advisory lock held
//! across validate and insert.

pub mod availability;
pub mod calendar;
pub mod conflict;
pub mod overlap;
pub mod slots;
pub mod validator;

use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};
use crate::models::appointment::{Appointment, BookingRequest, NewAppointment, StatusAction};
use crate::models::slot::Slot;
use crate::models::validation::ScheduleValidation;
use crate::store::{AppointmentStore, CalendarStore};

use availability::AvailabilityChecker;
use calendar::WorkingCalendar;
use conflict::ConflictDetector;
use slots::SlotGenerator;
use validator::ScheduleValidator;

pub use crate::models::interval::calculate_end_time;

/// Outcome of a booking attempt. A rejection carries every violation found.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    Booked(Appointment),
    Rejected(ScheduleValidation),
}

#[derive(Clone)]
pub struct BookingEngine {
    appointments: Arc<dyn AppointmentStore>,
    calendar: Arc<dyn CalendarStore>,
}

impl BookingEngine {
    pub fn new(appointments: Arc<dyn AppointmentStore>, calendar: Arc<dyn CalendarStore>) -> Self {
        Self {
            appointments,
            calendar,
        }
    }

    fn validator(&self) -> ScheduleValidator<'_> {
        ScheduleValidator::new(
            AvailabilityChecker::new(WorkingCalendar::new(self.calendar.as_ref())),
            ConflictDetector::new(self.appointments.as_ref()),
        )
    }

    /// Validates `[start, end)` for `staff_id` against the current local time.
    ///
    /// Validation outcomes come back as data in [`ScheduleValidation`]; only store
    /// failures are returned as `Err`.
    pub async fn validate_schedule(
        &self,
        staff_id: Uuid,
        start: NaiveDateTime,
        end: NaiveDateTime,
        exclude_id: Option<Uuid>,
    ) -> BookingResult<ScheduleValidation> {
        self.validate_schedule_at(staff_id, start, end, exclude_id, now())
            .await
    }

    /// Same as [`validate_schedule`](Self::validate_schedule) with an explicit "now".
    pub async fn validate_schedule_at(
        &self,
        staff_id: Uuid,
        start: NaiveDateTime,
        end: NaiveDateTime,
        exclude_id: Option<Uuid>,
        now: NaiveDateTime,
    ) -> BookingResult<ScheduleValidation> {
        self.validator()
            .validate(staff_id, start, end, exclude_id, now)
            .await
    }

    pub async fn get_available_slots(
        &self,
        staff_id: Uuid,
        date: NaiveDate,
        duration_mins: u32,
    ) -> BookingResult<Vec<Slot>> {
        SlotGenerator::new(
            WorkingCalendar::new(self.calendar.as_ref()),
            self.appointments.as_ref(),
        )
        .generate(staff_id, date, duration_mins)
        .await
    }

    pub fn calculate_end_time(
        &self,
        start: NaiveDateTime,
        duration_mins: u32,
    ) -> BookingResult<NaiveDateTime> {
        calculate_end_time(start, duration_mins)
    }

    pub async fn book_appointment(&self, request: BookingRequest) -> BookingResult<BookingOutcome> {
        self.book_appointment_at(request, now()).await
    }

    /// Validates the request and, when valid, inserts a pending appointment.
    ///
    /// Not atomic on its own; see the module docs.
    pub async fn book_appointment_at(
        &self,
        request: BookingRequest,
        now: NaiveDateTime,
    ) -> BookingResult<BookingOutcome> {
        if request.duration == 0 {
            return Err(BookingError::Validation(
                "Duration must be at least one minute".to_string(),
            ));
        }

        let end = calculate_end_time(request.start, request.duration)?;
        let validation = self
            .validate_schedule_at(request.staff_id, request.start, end, None, now)
            .await?;

        if !validation.valid {
            warn!(
                "Booking rejected: staff_id={}, start={}, violations={:?}",
                request.staff_id,
                request.start,
                validation.kinds()
            );
            return Ok(BookingOutcome::Rejected(validation));
        }

        let appointment = self
            .appointments
            .insert(NewAppointment {
                staff_id: request.staff_id,
                service_id: request.service_id,
                customer_id: request.customer_id,
                start_at: request.start,
                end_at: end,
            })
            .await?;

        info!(
            "Appointment booked: id={}, staff_id={}, start={}, end={}",
            appointment.id, appointment.staff_id, appointment.start_at, appointment.end_at
        );
        Ok(BookingOutcome::Booked(appointment))
    }

    /// Moves an appointment through its lifecycle. Cancelling frees the interval
    /// immediately for later validation and slot generation.
    pub async fn change_status(&self, id: Uuid, action: StatusAction) -> BookingResult<Appointment> {
        let appointment = self
            .appointments
            .find_by_id(id)
            .await?
            .ok_or_else(|| BookingError::NotFound(format!("Appointment with ID {} not found", id)))?;

        let next = appointment.status.apply(action)?;
        let updated = self.appointments.update_status(id, next).await?;

        info!(
            "Appointment status changed: id={}, from={}, to={}",
            id, appointment.status, updated.status
        );
        Ok(updated)
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
