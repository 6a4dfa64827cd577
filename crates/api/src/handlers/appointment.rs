use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bookwell_core::engine::BookingOutcome;
use bookwell_core::models::appointment::{Appointment, BookingRequest, ChangeStatusRequest};
use bookwell_db::lock::StaffLock;
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

pub enum BookingResponse {
    Created(Appointment),
    Rejected(bookwell_core::models::validation::ScheduleValidation),
}

impl IntoResponse for BookingResponse {
    fn into_response(self) -> Response {
        match self {
            BookingResponse::Created(appointment) => {
                (StatusCode::CREATED, Json(appointment)).into_response()
            }
            BookingResponse::Rejected(validation) => {
                (StatusCode::CONFLICT, Json(validation)).into_response()
            }
        }
    }
}

/// Books an appointment after validating it.
///
/// With a database pool configured, validation and insert run while holding the
/// staff member's advisory lock, so concurrent bookings for one staff member are
/// serialized.
///
/// # Endpoint
///
/// ```text
/// POST /api/appointments
/// ```
#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<BookingRequest>,
) -> Result<BookingResponse, AppError> {
    let lock = match &state.db_pool {
        Some(pool) => Some(StaffLock::acquire(pool, payload.staff_id).await?),
        None => None,
    };

    let outcome = state.engine.book_appointment(payload).await?;

    if let Some(lock) = lock {
        lock.release().await?;
    }

    Ok(match outcome {
        BookingOutcome::Booked(appointment) => BookingResponse::Created(appointment),
        BookingOutcome::Rejected(validation) => BookingResponse::Rejected(validation),
    })
}

/// Applies a lifecycle action (`confirm`, `cancel`, `complete`, `no_show`).
///
/// # Endpoint
///
/// ```text
/// PUT /api/appointments/:id/status
/// ```
#[axum::debug_handler]
pub async fn change_status(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ChangeStatusRequest>,
) -> Result<Json<Appointment>, AppError> {
    let appointment = state.engine.change_status(id, payload.action).await?;
    Ok(Json(appointment))
}
