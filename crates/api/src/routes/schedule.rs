use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/schedule/validate",
            post(handlers::schedule::validate_schedule),
        )
        .route("/api/schedule/end-time", get(handlers::schedule::end_time))
}
