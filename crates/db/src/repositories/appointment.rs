use crate::models::DbAppointment;
use chrono::{NaiveDate, NaiveDateTime};
use eyre::{eyre, Result};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use bookwell_core::models::appointment::AppointmentStatus;
use bookwell_core::models::interval::day_bounds;

const LIVE_STATUSES: [&str; 2] = ["pending", "confirmed"];

pub async fn create_appointment(
    pool: &Pool<Postgres>,
    staff_id: Uuid,
    service_id: Uuid,
    customer_id: Uuid,
    start_at: NaiveDateTime,
    end_at: NaiveDateTime,
) -> Result<DbAppointment> {
    let id = Uuid::new_v4();

    tracing::debug!(
        "Creating appointment: id={}, staff_id={}, start_at={}, end_at={}",
        id, staff_id, start_at, end_at
    );

    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        WITH inserted AS (
            INSERT INTO appointments (id, staff_id, service_id, customer_id, start_at, end_at, status)
            VALUES ($1, $2, $3, $4, $5, $6, 'pending')
            RETURNING *
        )
        SELECT a.id, a.staff_id, a.service_id, a.customer_id,
               s.name AS service_name, c.name AS customer_name,
               a.start_at, a.end_at, a.status, a.created_at
        FROM inserted a
        JOIN services s ON s.id = a.service_id
        JOIN customers c ON c.id = a.customer_id
        "#,
    )
    .bind(id)
    .bind(staff_id)
    .bind(service_id)
    .bind(customer_id)
    .bind(start_at)
    .bind(end_at)
    .fetch_one(pool)
    .await?;

    Ok(appointment)
}

pub async fn get_appointment_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbAppointment>> {
    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT a.id, a.staff_id, a.service_id, a.customer_id,
               s.name AS service_name, c.name AS customer_name,
               a.start_at, a.end_at, a.status, a.created_at
        FROM appointments a
        JOIN services s ON s.id = a.service_id
        JOIN customers c ON c.id = a.customer_id
        WHERE a.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(appointment)
}

/// Live appointments of a staff member, minus `exclude_id` when given.
pub async fn get_live_appointments(
    pool: &Pool<Postgres>,
    staff_id: Uuid,
    exclude_id: Option<Uuid>,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT a.id, a.staff_id, a.service_id, a.customer_id,
               s.name AS service_name, c.name AS customer_name,
               a.start_at, a.end_at, a.status, a.created_at
        FROM appointments a
        JOIN services s ON s.id = a.service_id
        JOIN customers c ON c.id = a.customer_id
        WHERE a.staff_id = $1
          AND a.status = ANY($2)
          AND ($3::uuid IS NULL OR a.id <> $3)
        "#,
    )
    .bind(staff_id)
    .bind(&LIVE_STATUSES[..])
    .bind(exclude_id)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

/// Live appointments of a staff member starting on `date`.
pub async fn get_live_appointments_on_date(
    pool: &Pool<Postgres>,
    staff_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<DbAppointment>> {
    let (first, last) = day_bounds(date);

    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT a.id, a.staff_id, a.service_id, a.customer_id,
               s.name AS service_name, c.name AS customer_name,
               a.start_at, a.end_at, a.status, a.created_at
        FROM appointments a
        JOIN services s ON s.id = a.service_id
        JOIN customers c ON c.id = a.customer_id
        WHERE a.staff_id = $1
          AND a.status = ANY($2)
          AND a.start_at >= $3
          AND a.start_at <= $4
        ORDER BY a.start_at ASC
        "#,
    )
    .bind(staff_id)
    .bind(&LIVE_STATUSES[..])
    .bind(first)
    .bind(last)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

pub async fn update_appointment_status(
    pool: &Pool<Postgres>,
    id: Uuid,
    status: AppointmentStatus,
) -> Result<DbAppointment> {
    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        WITH updated AS (
            UPDATE appointments
            SET status = $2
            WHERE id = $1
            RETURNING *
        )
        SELECT a.id, a.staff_id, a.service_id, a.customer_id,
               s.name AS service_name, c.name AS customer_name,
               a.start_at, a.end_at, a.status, a.created_at
        FROM updated a
        JOIN services s ON s.id = a.service_id
        JOIN customers c ON c.id = a.customer_id
        "#,
    )
    .bind(id)
    .bind(status.as_str())
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| eyre!("Appointment not found"))?;

    Ok(appointment)
}
