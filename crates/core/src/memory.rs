//! In-memory implementation of both store traits.
//!
//! Appointments are kept in insertion order, which is also the order
//! `find_live` returns them in.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc, Weekday};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};
use crate::models::appointment::{Appointment, AppointmentStatus, NewAppointment};
use crate::models::interval::day_bounds;
use crate::models::working_window::WorkingWindow;
use crate::store::{AppointmentStore, CalendarStore};

#[derive(Debug, Default)]
pub struct InMemoryStore {
    appointments: RwLock<Vec<Appointment>>,
    windows: RwLock<HashMap<(Uuid, Weekday), WorkingWindow>>,
    services: RwLock<HashMap<Uuid, String>>,
    customers: RwLock<HashMap<Uuid, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets (or replaces) the window for the window's staff member and weekday.
    pub async fn set_window(&self, window: WorkingWindow) {
        self.windows
            .write()
            .await
            .insert((window.staff_id(), window.weekday()), window);
    }

    pub async fn add_service(&self, id: Uuid, name: impl Into<String>) {
        self.services.write().await.insert(id, name.into());
    }

    pub async fn add_customer(&self, id: Uuid, name: impl Into<String>) {
        self.customers.write().await.insert(id, name.into());
    }

    /// Stores an appointment as-is, bypassing validation.
    pub async fn seed(&self, appointment: Appointment) {
        self.appointments.write().await.push(appointment);
    }

    pub async fn all_appointments(&self) -> Vec<Appointment> {
        self.appointments.read().await.clone()
    }
}

#[async_trait]
impl AppointmentStore for InMemoryStore {
    async fn find_live(
        &self,
        staff_id: Uuid,
        exclude_id: Option<Uuid>,
    ) -> BookingResult<Vec<Appointment>> {
        let appointments = self.appointments.read().await;
        Ok(appointments
            .iter()
            .filter(|a| a.staff_id == staff_id && a.is_live())
            .filter(|a| Some(a.id) != exclude_id)
            .cloned()
            .collect())
    }

    async fn find_live_on_date(
        &self,
        staff_id: Uuid,
        date: NaiveDate,
    ) -> BookingResult<Vec<Appointment>> {
        let (first, last) = day_bounds(date);
        let appointments = self.appointments.read().await;
        Ok(appointments
            .iter()
            .filter(|a| a.staff_id == staff_id && a.is_live())
            .filter(|a| a.start_at >= first && a.start_at <= last)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> BookingResult<Option<Appointment>> {
        let appointments = self.appointments.read().await;
        Ok(appointments.iter().find(|a| a.id == id).cloned())
    }

    async fn insert(&self, appointment: NewAppointment) -> BookingResult<Appointment> {
        let service_name = self
            .services
            .read()
            .await
            .get(&appointment.service_id)
            .cloned()
            .ok_or_else(|| {
                BookingError::NotFound(format!("Service with ID {} not found", appointment.service_id))
            })?;
        let customer_name = self
            .customers
            .read()
            .await
            .get(&appointment.customer_id)
            .cloned()
            .ok_or_else(|| {
                BookingError::NotFound(format!(
                    "Customer with ID {} not found",
                    appointment.customer_id
                ))
            })?;

        let stored = Appointment {
            id: Uuid::new_v4(),
            staff_id: appointment.staff_id,
            service_id: appointment.service_id,
            customer_id: appointment.customer_id,
            service_name,
            customer_name,
            start_at: appointment.start_at,
            end_at: appointment.end_at,
            status: AppointmentStatus::Pending,
            created_at: Utc::now(),
        };

        self.appointments.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: AppointmentStatus,
    ) -> BookingResult<Appointment> {
        let mut appointments = self.appointments.write().await;
        let appointment = appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| BookingError::NotFound(format!("Appointment with ID {} not found", id)))?;
        appointment.status = status;
        Ok(appointment.clone())
    }
}

#[async_trait]
impl CalendarStore for InMemoryStore {
    async fn find_window(
        &self,
        staff_id: Uuid,
        weekday: Weekday,
    ) -> BookingResult<Option<WorkingWindow>> {
        Ok(self.windows.read().await.get(&(staff_id, weekday)).cloned())
    }
}
