use axum::http::StatusCode;
use bookwell_core::models::appointment::{Appointment, AppointmentStatus};
use bookwell_core::models::validation::{ScheduleValidation, ViolationKind};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use uuid::Uuid;

use crate::test_utils::{t, TestContext};

async fn book(ctx: &TestContext, h: u32, m: u32, duration: u32) -> axum_test::TestResponse {
    ctx.server
        .post("/api/appointments")
        .json(&json!({
            "staff_id": ctx.staff_id,
            "service_id": ctx.service_id,
            "customer_id": ctx.customer_id,
            "start": ctx.at(h, m),
            "duration": duration,
        }))
        .await
}

#[test_log::test(tokio::test)]
async fn test_book_and_reject_overlap() {
    let ctx = TestContext::new().await;

    let created = book(&ctx, 10, 0, 60).await;
    created.assert_status(StatusCode::CREATED);
    let appointment: Appointment = created.json();
    assert_eq!(appointment.status, AppointmentStatus::Pending);
    assert_eq!(appointment.end_at, ctx.at(11, 0));
    assert_eq!(appointment.customer_name, ctx.customer_name);

    let rejected = book(&ctx, 10, 30, 60).await;
    rejected.assert_status(StatusCode::CONFLICT);
    let validation: ScheduleValidation = rejected.json();
    assert!(!validation.valid);
    assert_eq!(validation.kinds(), vec![ViolationKind::AppointmentConflict]);

    // Back-to-back is fine.
    book(&ctx, 11, 0, 30).await.assert_status(StatusCode::CREATED);
    assert_eq!(ctx.store.all_appointments().await.len(), 2);
}

#[tokio::test]
async fn test_booking_into_break_is_rejected() {
    let ctx = TestContext::new().await;

    book(&ctx, 11, 0, 60).await.assert_status(StatusCode::CREATED);

    let rejected = book(&ctx, 11, 30, 31).await;
    rejected.assert_status(StatusCode::CONFLICT);
    let validation: ScheduleValidation = rejected.json();
    assert!(validation.has(ViolationKind::BreakConflict));
}

#[tokio::test]
async fn test_cancel_frees_the_slot() {
    let ctx = TestContext::new().await;
    let id = ctx.seed(ctx.at(14, 0), 60, AppointmentStatus::Confirmed).await;

    book(&ctx, 14, 0, 60).await.assert_status(StatusCode::CONFLICT);

    let response = ctx
        .server
        .put(&format!("/api/appointments/{}/status", id))
        .json(&json!({ "action": "cancel" }))
        .await;
    response.assert_status_ok();
    let cancelled: Appointment = response.json();
    assert_eq!(cancelled.status, AppointmentStatus::Cancelled);

    book(&ctx, 14, 0, 60).await.assert_status(StatusCode::CREATED);
}

#[rstest]
#[case(AppointmentStatus::Pending, "confirm", StatusCode::OK)]
#[case(AppointmentStatus::Confirmed, "complete", StatusCode::OK)]
#[case(AppointmentStatus::Confirmed, "no_show", StatusCode::OK)]
#[case(AppointmentStatus::Pending, "complete", StatusCode::CONFLICT)]
#[case(AppointmentStatus::Cancelled, "confirm", StatusCode::CONFLICT)]
#[case(AppointmentStatus::Completed, "cancel", StatusCode::CONFLICT)]
#[tokio::test]
async fn test_status_transitions(
    #[case] from: AppointmentStatus,
    #[case] action: &str,
    #[case] expected: StatusCode,
) {
    let ctx = TestContext::new().await;
    let id = ctx.seed(ctx.at(15, 0), 30, from).await;

    let response = ctx
        .server
        .put(&format!("/api/appointments/{}/status", id))
        .json(&json!({ "action": action }))
        .await;

    response.assert_status(expected);
}

#[tokio::test]
async fn test_status_change_for_unknown_appointment() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .put(&format!("/api/appointments/{}/status", Uuid::new_v4()))
        .json(&json!({ "action": "cancel" }))
        .expect_failure()
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_booking_with_out_of_range_end_is_bad_request() {
    let ctx = TestContext::new().await;
    let start = NaiveDate::MAX.and_time(t(23, 0));

    let response = ctx
        .server
        .post("/api/appointments")
        .json(&json!({
            "staff_id": ctx.staff_id,
            "service_id": ctx.service_id,
            "customer_id": ctx.customer_id,
            "start": start,
            "duration": 120,
        }))
        .expect_failure()
        .await;

    response.assert_status_bad_request();
    assert!(ctx.store.all_appointments().await.is_empty());
}
