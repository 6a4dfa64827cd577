use axum::{
    extract::{Query, State},
    Json,
};
use bookwell_core::models::validation::{ScheduleValidation, ValidateScheduleRequest};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{middleware::error_handling::AppError, ApiState};

/// Validates a requested interval for a staff member.
///
/// Always answers 200 when the stores are reachable; a refused interval is
/// reported through `valid: false` and the accumulated `violations`.
///
/// # Endpoint
///
/// ```text
/// POST /api/schedule/validate
/// ```
#[axum::debug_handler]
pub async fn validate_schedule(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ValidateScheduleRequest>,
) -> Result<Json<ScheduleValidation>, AppError> {
    let validation = state
        .engine
        .validate_schedule(
            payload.staff_id,
            payload.start,
            payload.end,
            payload.exclude_appointment_id,
        )
        .await?;

    Ok(Json(validation))
}

#[derive(Debug, Deserialize)]
pub struct EndTimeQuery {
    pub start: NaiveDateTime,
    /// Duration in minutes
    pub duration: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EndTimeResponse {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// `GET /api/schedule/end-time?start=2030-03-04T14:00:00&duration=90`
///
/// Answers 400 when the end would fall outside the supported date range.
pub async fn end_time(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<EndTimeQuery>,
) -> Result<Json<EndTimeResponse>, AppError> {
    let end = state.engine.calculate_end_time(query.start, query.duration)?;

    Ok(Json(EndTimeResponse {
        start: query.start,
        end,
    }))
}
