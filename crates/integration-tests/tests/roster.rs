//! Technician, operator and vendor records over HTTP.

use isp_console_integration_tests::{TestContext, item_ids};
use reqwest::StatusCode;
use serde_json::Value;

const ADMIN: &str = "admin@fibernet.in";
const STAFF: &str = "staff@fibernet.in";
const OPERATOR: &str = "operator@fibernet.in";

async fn delete(ctx: &TestContext, path: &str) -> reqwest::Response {
    ctx.client
        .delete(ctx.url(path))
        .send()
        .await
        .unwrap_or_else(|e| panic!("DELETE {path} failed: {e}"))
}

#[tokio::test]
async fn test_technician_show_and_missing() {
    let ctx = TestContext::new().await;
    ctx.login(STAFF).await;

    let body = ctx.get_json("/api/technicians/t-2").await;
    assert_eq!(body["id"], "t-2");
    assert_eq!(body["employeeId"], "EMP-102");
    assert_eq!(body["status"], "on-leave");

    let resp = ctx.get("/api/technicians/t-404").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_technician_delete_returns_refreshed_roster() {
    let ctx = TestContext::new().await;
    ctx.login(STAFF).await;

    let resp = delete(&ctx, "/api/technicians/t-1").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap_or_default();
    assert_eq!(body["total"], 1);
    assert_eq!(item_ids(&body, "id"), ["t-2"]);
    assert_eq!(body["stats"]["active"], 0);
    assert_eq!(body["stats"]["onLeave"], 1);

    assert_eq!(ctx.backend.mutations(), ["DELETE /technicians/t-1"]);
}

#[tokio::test]
async fn test_technician_routes_are_staff_only() {
    let ctx = TestContext::new().await;
    ctx.login(OPERATOR).await;

    let resp = ctx.get("/api/technicians/t-1").await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = delete(&ctx, "/api/technicians/t-1").await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(ctx.backend.mutations().is_empty());
    assert_eq!(ctx.backend.data().technicians.len(), 2);
}

#[tokio::test]
async fn test_operator_delete_removes_profile() {
    let ctx = TestContext::new().await;
    ctx.login(ADMIN).await;

    let resp = delete(&ctx, "/api/operators/op-2").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap_or_default();
    assert_eq!(body["total"], 1);
    assert_eq!(item_ids(&body, "user_id"), ["op-1"]);
    assert_eq!(body["stats"]["suspended"], 0);

    assert_eq!(ctx.backend.mutations(), ["DELETE /operators/op-2/profile"]);
}

#[tokio::test]
async fn test_operator_delete_is_admin_only() {
    let ctx = TestContext::new().await;
    ctx.login(STAFF).await;

    let resp = delete(&ctx, "/api/operators/op-1").await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(ctx.backend.mutations().is_empty());
    assert_eq!(ctx.backend.data().operators.len(), 2);
}

#[tokio::test]
async fn test_vendor_reject_and_suspend() {
    let ctx = TestContext::new().await;
    ctx.login(ADMIN).await;

    let resp = ctx.post("/api/vendors/v-1/reject").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap_or_default();
    assert_eq!(body["stats"]["rejected"], 1);
    assert_eq!(body["stats"]["pending"], 0);

    let resp = ctx.post("/api/vendors/v-2/suspend?status=suspended").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap_or_default();
    assert_eq!(body["stats"]["suspended"], 1);
    assert_eq!(body["stats"]["active"], 0);
    assert_eq!(body["filtered"], 1);
    assert_eq!(item_ids(&body, "id"), ["v-2"]);

    assert_eq!(
        ctx.backend.mutations(),
        ["PUT /vendors/v-1", "PUT /vendors/v-2"]
    );
}

#[tokio::test]
async fn test_vendor_actions_are_admin_only() {
    let ctx = TestContext::new().await;
    ctx.login(STAFF).await;

    for action in ["approve", "reject", "suspend"] {
        let resp = ctx.post(&format!("/api/vendors/v-1/{action}")).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "{action}");
    }
    assert!(ctx.backend.mutations().is_empty());
}

#[tokio::test]
async fn test_unknown_vendor_is_not_found() {
    let ctx = TestContext::new().await;
    ctx.login(ADMIN).await;

    let resp = ctx.post("/api/vendors/v-404/reject").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
