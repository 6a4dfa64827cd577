use std::sync::Arc;

use axum_test::TestServer;
use bookwell_api::{app, ApiState};
use bookwell_core::memory::InMemoryStore;
use bookwell_core::models::appointment::{Appointment, AppointmentStatus};
use bookwell_core::models::working_window::{BreakPeriod, WorkingWindow};
use bookwell_core::BookingEngine;
use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc, Weekday};
use fake::{faker::name::en::Name, Fake};
use uuid::Uuid;

pub fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// A Monday comfortably in the future, so bookings on it are never in the past.
pub fn next_monday() -> NaiveDate {
    let mut date = Local::now().date_naive() + Duration::days(7);
    while date.weekday() != Weekday::Mon {
        date += Duration::days(1);
    }
    date
}

pub struct TestContext {
    pub store: Arc<InMemoryStore>,
    pub server: TestServer,
    pub staff_id: Uuid,
    pub service_id: Uuid,
    pub customer_id: Uuid,
    pub customer_name: String,
    pub date: NaiveDate,
}

impl TestContext {
    /// In-memory stores with one staff member working Mondays 09:00-18:00,
    /// lunch 12:00-13:00.
    pub async fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let staff_id = Uuid::new_v4();
        let service_id = Uuid::new_v4();
        let customer_id = Uuid::new_v4();
        let customer_name: String = Name().fake();

        store
            .set_window(
                WorkingWindow::new(
                    staff_id,
                    Weekday::Mon,
                    t(9, 0),
                    t(18, 0),
                    Some(BreakPeriod {
                        start: t(12, 0),
                        end: t(13, 0),
                    }),
                )
                .unwrap(),
            )
            .await;
        store.add_service(service_id, "Haircut").await;
        store.add_customer(customer_id, customer_name.clone()).await;

        let state = Arc::new(ApiState {
            engine: BookingEngine::new(store.clone(), store.clone()),
            db_pool: None,
        });
        let server = TestServer::new(app(state)).unwrap();

        Self {
            store,
            server,
            staff_id,
            service_id,
            customer_id,
            customer_name,
            date: next_monday(),
        }
    }

    pub fn at(&self, h: u32, m: u32) -> NaiveDateTime {
        self.date.and_time(t(h, m))
    }

    pub async fn seed(&self, start: NaiveDateTime, minutes: i64, status: AppointmentStatus) -> Uuid {
        let id = Uuid::new_v4();
        self.store
            .seed(Appointment {
                id,
                staff_id: self.staff_id,
                service_id: self.service_id,
                customer_id: self.customer_id,
                service_name: "Haircut".to_string(),
                customer_name: self.customer_name.clone(),
                start_at: start,
                end_at: start + Duration::minutes(minutes),
                status,
                created_at: Utc::now(),
            })
            .await;
        id
    }
}
