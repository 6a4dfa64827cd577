//! # Bookwell API
//!
//! HTTP surface of the appointment availability engine. The booking flow uses it
//! to validate a requested interval, populate a time picker, book, and move
//! appointments through their lifecycle.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate requests into engine calls
//! - **Middleware**: Error-to-HTTP mapping
//! - **Config**: Environment configuration
//!
//! The API uses Axum as the web framework and SQLx for database interactions.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use bookwell_core::BookingEngine;
use bookwell_db::store::{PgAppointmentStore, PgCalendarStore};
use eyre::{Result, WrapErr};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Availability engine over the configured stores
    pub engine: BookingEngine,

    /// Pool used for per-staff booking locks. `None` when the engine runs over
    /// non-PostgreSQL stores, in which case bookings are not serialized.
    pub db_pool: Option<PgPool>,
}

impl ApiState {
    /// State backed by PostgreSQL stores sharing one pool.
    pub fn with_pool(db_pool: PgPool) -> Self {
        let engine = BookingEngine::new(
            Arc::new(PgAppointmentStore::new(db_pool.clone())),
            Arc::new(PgCalendarStore::new(db_pool.clone())),
        );
        Self {
            engine,
            db_pool: Some(db_pool),
        }
    }
}

/// Builds the application router with all routes attached to `state`.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Validation and end-time endpoints
        .merge(routes::schedule::routes())
        // Slot picker endpoint
        .merge(routes::slots::routes())
        // Booking and lifecycle endpoints
        .merge(routes::appointment::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration and database connection
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::with_pool(db_pool));
    let app = app(state).layer(TraceLayer::new_for_http());

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| origin.parse::<axum::http::HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .wrap_err("Invalid origin in API_CORS_ORIGINS")?;

        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(axum::error_handling::HandleErrorLayer::new(|_: tower::BoxError| async {
                axum::http::StatusCode::REQUEST_TIMEOUT
            }))
            .timeout(std::time::Duration::from_secs(config.request_timeout)),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
