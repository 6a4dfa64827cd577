use axum::{
    extract::{Path, Query, State},
    Json,
};
use bookwell_core::models::slot::SlotsResponse;
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Query parameters for the slot picker
#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    /// Calendar date, `YYYY-MM-DD`
    pub date: NaiveDate,

    /// Service duration in minutes
    pub duration: u32,
}

/// Lists the bookable start times for a staff member on one date.
///
/// # Endpoint
///
/// ```text
/// GET /api/staff/:staff_id/slots?date=2030-03-04&duration=90
/// ```
///
/// An empty `slots` list is a normal answer (day off, or fully booked).
#[axum::debug_handler]
pub async fn get_available_slots(
    State(state): State<Arc<ApiState>>,
    Path(staff_id): Path<Uuid>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<SlotsResponse>, AppError> {
    let slots = state
        .engine
        .get_available_slots(staff_id, query.date, query.duration)
        .await?;

    Ok(Json(SlotsResponse {
        date: query.date,
        slots,
    }))
}
