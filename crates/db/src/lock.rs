use eyre::{Result, WrapErr};
use sqlx::{Postgres, Transaction};
use tracing::debug;
use uuid::Uuid;

use crate::DbPool;

/// Per-staff advisory lock that serializes validate-then-insert.
///
/// Holds `pg_advisory_xact_lock` in an open transaction. Every booking for the
/// same staff member waits here, so by the time the lock is granted the previous
/// holder's insert is committed and visible to validation. Dropping the guard
/// without [`release`](Self::release) rolls the transaction back, which also
/// frees the lock.
pub struct StaffLock {
    tx: Transaction<'static, Postgres>,
    staff_id: Uuid,
}

impl StaffLock {
    pub async fn acquire(pool: &DbPool, staff_id: Uuid) -> Result<Self> {
        let mut tx = pool
            .begin()
            .await
            .wrap_err("Failed to begin booking transaction")?;

        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
            .bind(staff_id.to_string())
            .execute(&mut *tx)
            .await
            .wrap_err_with(|| format!("Failed to lock staff member {}", staff_id))?;

        debug!("Acquired booking lock: staff_id={}", staff_id);
        Ok(Self { tx, staff_id })
    }

    pub async fn release(self) -> Result<()> {
        self.tx
            .commit()
            .await
            .wrap_err("Failed to release booking lock")?;
        debug!("Released booking lock: staff_id={}", self.staff_id);
        Ok(())
    }
}
