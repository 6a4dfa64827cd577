use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create staff table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS staff (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create customers table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create services table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS services (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            duration_minutes INTEGER NOT NULL CHECK (duration_minutes > 0),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create working_hours table. Times are local wall-clock values.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS working_hours (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            staff_id UUID NOT NULL REFERENCES staff(id),
            weekday SMALLINT NOT NULL CHECK (weekday BETWEEN 0 AND 6),
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            break_start TIME NULL,
            break_end TIME NULL,
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            CONSTRAINT valid_working_hours CHECK (start_time < end_time),
            CONSTRAINT complete_break CHECK ((break_start IS NULL) = (break_end IS NULL)),
            CONSTRAINT break_within_hours CHECK (
                break_start IS NULL
                OR (start_time <= break_start AND break_start < break_end AND break_end <= end_time)
            )
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create appointments table. Rows are never deleted; cancellation is a status.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            staff_id UUID NOT NULL REFERENCES staff(id),
            service_id UUID NOT NULL REFERENCES services(id),
            customer_id UUID NOT NULL REFERENCES customers(id),
            start_at TIMESTAMP NOT NULL,
            end_at TIMESTAMP NOT NULL,
            status VARCHAR(16) NOT NULL DEFAULT 'pending'
                CHECK (status IN ('pending', 'confirmed', 'cancelled', 'completed', 'no_show')),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_appointment_range CHECK (end_at > start_at)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    let indexes = [
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_working_hours_active_day \
            ON working_hours(staff_id, weekday) WHERE is_active",
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_appointments_live_start \
            ON appointments(staff_id, start_at) WHERE status IN ('pending', 'confirmed')",
        "CREATE INDEX IF NOT EXISTS idx_appointments_staff_id ON appointments(staff_id)",
        "CREATE INDEX IF NOT EXISTS idx_appointments_start_at ON appointments(start_at)",
    ];
    for statement in indexes {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
