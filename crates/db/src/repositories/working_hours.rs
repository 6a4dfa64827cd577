use crate::models::DbWorkingHours;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use bookwell_core::models::working_window::{weekday_index, WorkingWindow};
use chrono::Weekday;

pub async fn get_working_hours(
    pool: &Pool<Postgres>,
    staff_id: Uuid,
    weekday: Weekday,
) -> Result<Option<DbWorkingHours>> {
    let hours = sqlx::query_as::<_, DbWorkingHours>(
        r#"
        SELECT staff_id, weekday, start_time, end_time, break_start, break_end
        FROM working_hours
        WHERE staff_id = $1 AND weekday = $2 AND is_active
        "#,
    )
    .bind(staff_id)
    .bind(weekday_index(weekday))
    .fetch_optional(pool)
    .await?;

    Ok(hours)
}

/// Replaces the active window for the window's staff member and weekday.
pub async fn upsert_working_hours(
    pool: &Pool<Postgres>,
    window: &WorkingWindow,
) -> Result<DbWorkingHours> {
    let (break_start, break_end) = match window.break_period() {
        Some(b) => (Some(b.start), Some(b.end)),
        None => (None, None),
    };

    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        UPDATE working_hours
        SET is_active = FALSE
        WHERE staff_id = $1 AND weekday = $2 AND is_active
        "#,
    )
    .bind(window.staff_id())
    .bind(weekday_index(window.weekday()))
    .execute(&mut *tx)
    .await?;

    let hours = sqlx::query_as::<_, DbWorkingHours>(
        r#"
        INSERT INTO working_hours (staff_id, weekday, start_time, end_time, break_start, break_end)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING staff_id, weekday, start_time, end_time, break_start, break_end
        "#,
    )
    .bind(window.staff_id())
    .bind(weekday_index(window.weekday()))
    .bind(window.start_time())
    .bind(window.end_time())
    .bind(break_start)
    .bind(break_end)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(hours)
}
