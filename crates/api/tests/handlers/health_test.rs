use bookwell_api::routes::health::{HealthResponse, VersionResponse};
use pretty_assertions::assert_eq;

use crate::test_utils::TestContext;

#[tokio::test]
async fn test_health_without_database() {
    let ctx = TestContext::new().await;

    let response = ctx.server.get("/health").await;

    response.assert_status_ok();
    let body: HealthResponse = response.json();
    assert_eq!(body.status, "ok");
    assert_eq!(body.database, None);
}

#[tokio::test]
async fn test_version() {
    let ctx = TestContext::new().await;

    let body: VersionResponse = ctx.server.get("/version").await.json();

    assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
}
