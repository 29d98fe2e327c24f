//! Overview aggregation, partial failure and the other admin pages.

use isp_console_integration_tests::{FakeBackend, TestContext, item_ids};
use reqwest::{Method, StatusCode};
use serde_json::{Value, json};

#[tokio::test]
async fn test_admin_overview_has_every_section() {
    let ctx = TestContext::new().await;
    ctx.login("admin@fibernet.in").await;

    let body = ctx.get_json("/api/dashboard").await;
    assert_eq!(body["metrics"]["customers"], "3");
    assert_eq!(body["metrics"]["monthlyRevenue"], "₹1499.00");
    assert_eq!(body["metrics"]["openComplaints"], "2");
    assert_eq!(body["operators"]["total"], 2);
    assert_eq!(body["invoices"]["overdue"], 1);
    assert_eq!(body["followUps"]["total"], 2);
    assert_eq!(body["warnings"], json!([]));

    let recent: Vec<&str> = body["recentComplaints"]
        .as_array()
        .map(|items| items.iter().filter_map(|c| c["complaint_id"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(recent, ["CMP-3", "CMP-2", "CMP-1"]);
}

#[tokio::test]
async fn test_failed_section_becomes_warning() {
    let backend = FakeBackend::seeded();
    backend.fail("invoices");
    let ctx = TestContext::with_backend(backend).await;
    ctx.login("admin@fibernet.in").await;

    let body = ctx.get_json("/api/dashboard").await;
    let warnings = body["warnings"].as_array().cloned().unwrap_or_default();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings.first().map(|w| w["section"].clone()), Some(json!("invoices")));

    // The rest still loads.
    assert_eq!(body["metrics"]["customers"], "3");
    assert_eq!(body["operators"]["total"], 2);
    assert_eq!(body["invoices"]["total"], 0);
}

#[tokio::test]
async fn test_staff_overview_hides_admin_sections() {
    let ctx = TestContext::new().await;
    ctx.login("staff@fibernet.in").await;

    let body = ctx.get_json("/api/dashboard").await;
    assert_eq!(body["operators"], Value::Null);
    assert_eq!(body["invoices"], Value::Null);
    assert_eq!(body["followUps"]["total"], 2);
}

#[tokio::test]
async fn test_list_endpoint_failure_is_bad_gateway() {
    let backend = FakeBackend::seeded();
    backend.fail("customers");
    let ctx = TestContext::with_backend(backend).await;
    ctx.login("admin@fibernet.in").await;

    let resp = ctx.get("/api/customers").await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let text = resp.text().await.unwrap_or_default();
    assert_eq!(text, "ISP backend error");
}

#[tokio::test]
async fn test_vendor_approval_and_operator_suspension() {
    let ctx = TestContext::new().await;
    ctx.login("admin@fibernet.in").await;

    let resp = ctx.post("/api/vendors/v-1/approve").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap_or_default();
    assert_eq!(body["stats"]["active"], 2);
    assert_eq!(body["stats"]["pending"], 0);

    let resp = ctx.post("/api/operators/op-1/suspend").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap_or_default();
    assert_eq!(body["stats"]["suspended"], 2);

    let body = ctx.get_json("/api/operators?state=kerala").await;
    assert_eq!(item_ids(&body, "user_id"), ["op-2"]);
}

#[tokio::test]
async fn test_analytics_and_reports() {
    let ctx = TestContext::new().await;
    ctx.login("admin@fibernet.in").await;

    let body = ctx.get_json("/api/analytics/revenue?range=90d").await;
    assert_eq!(body[0]["period"], "90d");

    let resp = ctx.get("/api/analytics/revenue?range=decade").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = ctx.get_json("/api/analytics/plan-distribution").await;
    let percentages: Vec<f64> = body
        .as_array()
        .map(|shares| {
            shares
                .iter()
                .filter_map(|s| s["percentage"].as_str()?.parse().ok())
                .collect()
        })
        .unwrap_or_default();
    assert_eq!(percentages, [75.0, 25.0]);

    let resp = ctx
        .send_json(
            Method::POST,
            "/api/analytics/reports/schedule",
            &json!({ "kind": "revenue", "frequency": "weekly", "recipients": [] }),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_table_config_lookup() {
    let ctx = TestContext::new().await;
    ctx.login("staff@fibernet.in").await;

    let body = ctx.get_json("/api/tables/complaints").await;
    assert_eq!(body["tableId"], "complaints");

    let resp = ctx.get("/api/tables/unicorns").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
