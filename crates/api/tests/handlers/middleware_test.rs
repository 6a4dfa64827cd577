use axum::http::StatusCode;
use bookwell_api::middleware::error_handling::{map_error, AppError};
use bookwell_core::errors::BookingError;
use bookwell_core::models::appointment::{AppointmentStatus, StatusAction};
use rstest::rstest;

#[rstest]
#[case(BookingError::NotFound("Appointment not found".into()), StatusCode::NOT_FOUND)]
#[case(BookingError::Validation("Duration must be at least one minute".into()), StatusCode::BAD_REQUEST)]
#[case(
    BookingError::InvalidTransition {
        status: AppointmentStatus::Completed,
        action: StatusAction::Cancel,
    },
    StatusCode::CONFLICT
)]
#[case(BookingError::Database(eyre::eyre!("Database error")), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(
    BookingError::Internal(Box::new(std::io::Error::new(std::io::ErrorKind::Other, "Internal error"))),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn test_error_status_mapping(#[case] error: BookingError, #[case] expected: StatusCode) {
    assert_eq!(map_error(error).status(), expected);
}

#[test]
fn test_eyre_report_maps_to_database_error() {
    let error: AppError = eyre::eyre!("pool timed out").into();

    assert!(matches!(error.0, BookingError::Database(_)));
    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
