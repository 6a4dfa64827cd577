use bookwell_api::handlers::schedule::EndTimeResponse;
use bookwell_core::models::appointment::AppointmentStatus;
use bookwell_core::models::validation::{ScheduleValidation, ViolationKind};
use chrono::{Duration, NaiveDate};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::test_utils::{t, TestContext};

#[test_log::test(tokio::test)]
async fn test_validate_free_interval() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/api/schedule/validate")
        .json(&json!({
            "staff_id": ctx.staff_id,
            "start": ctx.at(9, 0),
            "end": ctx.at(10, 0),
        }))
        .await;

    response.assert_status_ok();
    let validation: ScheduleValidation = response.json();
    assert!(validation.valid);
    assert!(validation.violations.is_empty());
}

#[tokio::test]
async fn test_validate_reports_conflict_as_data() {
    let ctx = TestContext::new().await;
    ctx.seed(ctx.at(14, 0), 60, AppointmentStatus::Confirmed).await;

    let response = ctx
        .server
        .post("/api/schedule/validate")
        .json(&json!({
            "staff_id": ctx.staff_id,
            "start": ctx.at(14, 30),
            "end": ctx.at(15, 30),
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["valid"], json!(false));
    assert_eq!(body["violations"][0]["kind"], json!("AppointmentConflict"));
    let message = body["violations"][0]["message"].as_str().unwrap();
    assert!(message.contains("14:00") && message.contains("15:00"));
    assert!(message.contains(&ctx.customer_name));
}

#[tokio::test]
async fn test_validate_excluding_the_edited_appointment() {
    let ctx = TestContext::new().await;
    let id = ctx.seed(ctx.at(14, 0), 60, AppointmentStatus::Confirmed).await;

    let response = ctx
        .server
        .post("/api/schedule/validate")
        .json(&json!({
            "staff_id": ctx.staff_id,
            "start": ctx.at(14, 30),
            "end": ctx.at(15, 30),
            "exclude_appointment_id": id,
        }))
        .await;

    let validation: ScheduleValidation = response.json();
    assert!(validation.valid);
}

#[tokio::test]
async fn test_validate_accumulates_past_and_calendar_violations() {
    let ctx = TestContext::new().await;
    // A Monday in the past, during lunch.
    let past_monday = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();

    let response = ctx
        .server
        .post("/api/schedule/validate")
        .json(&json!({
            "staff_id": ctx.staff_id,
            "start": past_monday.and_time(t(12, 0)),
            "end": past_monday.and_time(t(12, 30)),
        }))
        .await;

    let validation: ScheduleValidation = response.json();
    assert_eq!(
        validation.kinds(),
        vec![ViolationKind::PastBooking, ViolationKind::BreakConflict]
    );
}

#[tokio::test]
async fn test_validate_rejects_malformed_body() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/api/schedule/validate")
        .json(&json!({ "staff_id": ctx.staff_id, "start": "tomorrow" }))
        .expect_failure()
        .await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_end_time() {
    let ctx = TestContext::new().await;
    let start = ctx.at(16, 30);

    let response = ctx
        .server
        .get("/api/schedule/end-time")
        .add_query_param("start", start.format("%Y-%m-%dT%H:%M:%S").to_string())
        .add_query_param("duration", 90)
        .await;

    response.assert_status_ok();
    let body: EndTimeResponse = response.json();
    assert_eq!(body.start, start);
    assert_eq!(body.end, start + Duration::minutes(90));
}

#[tokio::test]
async fn test_end_time_out_of_range_is_bad_request() {
    let ctx = TestContext::new().await;
    let start = NaiveDate::MAX.and_time(t(23, 0));

    let response = ctx
        .server
        .get("/api/schedule/end-time")
        .add_query_param("start", start)
        .add_query_param("duration", 120)
        .expect_failure()
        .await;

    response.assert_status_bad_request();
}
