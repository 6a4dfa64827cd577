use bookwell_core::models::appointment::AppointmentStatus;
use bookwell_core::models::slot::SlotsResponse;
use chrono::Duration;
use pretty_assertions::assert_eq;

use crate::test_utils::TestContext;

fn starts(body: &SlotsResponse) -> Vec<String> {
    body.slots
        .iter()
        .map(|s| s.start_time.format("%H:%M").to_string())
        .collect()
}

#[tokio::test]
async fn test_slots_for_ninety_minute_service() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .get(&format!("/api/staff/{}/slots", ctx.staff_id))
        .add_query_param("date", ctx.date.to_string())
        .add_query_param("duration", 90)
        .await;

    response.assert_status_ok();
    let body: SlotsResponse = response.json();
    assert_eq!(body.date, ctx.date);
    assert_eq!(
        starts(&body),
        vec![
            "09:00", "09:30", "10:00", "10:30", "13:00", "13:30", "14:00", "14:30", "15:00",
            "15:30", "16:00", "16:30",
        ]
    );

    let raw: serde_json::Value = response.json();
    assert_eq!(raw["slots"][11]["start_time"], "16:30");
    assert_eq!(raw["slots"][11]["end_time"], "18:00");
}

#[tokio::test]
async fn test_slots_exclude_live_bookings_only() {
    let ctx = TestContext::new().await;
    ctx.seed(ctx.at(9, 0), 60, AppointmentStatus::Pending).await;
    ctx.seed(ctx.at(16, 0), 60, AppointmentStatus::Cancelled).await;

    let response = ctx
        .server
        .get(&format!("/api/staff/{}/slots", ctx.staff_id))
        .add_query_param("date", ctx.date.to_string())
        .add_query_param("duration", 60)
        .await;

    let body: SlotsResponse = response.json();
    let starts = starts(&body);
    assert!(!starts.contains(&"09:00".to_string()));
    assert!(!starts.contains(&"09:30".to_string()));
    assert!(starts.contains(&"10:00".to_string()));
    assert!(starts.contains(&"16:00".to_string()));
}

#[tokio::test]
async fn test_day_off_yields_empty_list() {
    let ctx = TestContext::new().await;
    let tuesday = ctx.date + Duration::days(1);

    let response = ctx
        .server
        .get(&format!("/api/staff/{}/slots", ctx.staff_id))
        .add_query_param("date", tuesday.to_string())
        .add_query_param("duration", 30)
        .await;

    response.assert_status_ok();
    let body: SlotsResponse = response.json();
    assert!(body.slots.is_empty());
}

#[tokio::test]
async fn test_zero_duration_is_bad_request() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .get(&format!("/api/staff/{}/slots", ctx.staff_id))
        .add_query_param("date", ctx.date.to_string())
        .add_query_param("duration", 0)
        .expect_failure()
        .await;

    response.assert_status_bad_request();
}
