//! Staff, services and customers. The engine only needs their ids and display
//! names; these helpers exist to seed data.

use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_staff(pool: &Pool<Postgres>, name: &str) -> Result<Uuid> {
    let id = sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO staff (name)
        VALUES ($1)
        RETURNING id
        "#,
    )
    .bind(name)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

pub async fn create_service(
    pool: &Pool<Postgres>,
    name: &str,
    duration_minutes: i32,
) -> Result<Uuid> {
    let id = sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO services (name, duration_minutes)
        VALUES ($1, $2)
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(duration_minutes)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

pub async fn create_customer(pool: &Pool<Postgres>, name: &str) -> Result<Uuid> {
    let id = sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO customers (name)
        VALUES ($1)
        RETURNING id
        "#,
    )
    .bind(name)
    .fetch_one(pool)
    .await?;

    Ok(id)
}
