//! Login, logout, probes and role gates.

use isp_console_integration_tests::{FakeBackend, TestContext};
use reqwest::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_health_probes() {
    let ctx = TestContext::new().await;
    let resp = ctx.get("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap_or_default(), "ok");

    assert_eq!(ctx.get("/health/ready").await.status(), StatusCode::OK);

    let backend = FakeBackend::seeded();
    backend.fail("ping");
    let ctx = TestContext::with_backend(backend).await;
    assert_eq!(
        ctx.get("/health/ready").await.status(),
        StatusCode::SERVICE_UNAVAILABLE
    );
}

#[tokio::test]
async fn test_requests_without_session_are_unauthorized() {
    let ctx = TestContext::new().await;
    for path in ["/api/customers", "/api/dashboard", "/auth/me", "/api/tables/customers"] {
        assert_eq!(
            ctx.get(path).await.status(),
            StatusCode::UNAUTHORIZED,
            "{path}"
        );
    }
}

#[tokio::test]
async fn test_login_returns_profile_without_token() {
    let ctx = TestContext::new().await;
    let profile = ctx.login("operator@fibernet.in").await;
    assert_eq!(profile["role"], "operator");
    assert_eq!(profile["id"], "op-1");
    assert!(profile.get("token").is_none());

    let me = ctx.get_json("/auth/me").await;
    assert_eq!(me, profile);
}

#[tokio::test]
async fn test_bad_credentials_are_rejected() {
    let ctx = TestContext::new().await;
    let resp = ctx
        .client
        .post(ctx.url("/auth/login"))
        .json(&json!({ "email": "admin@fibernet.in", "password": "guess" }))
        .send()
        .await
        .unwrap_or_else(|e| panic!("login request failed: {e}"));
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = ctx
        .client
        .post(ctx.url("/auth/login"))
        .json(&json!({ "email": "", "password": "" }))
        .send()
        .await
        .unwrap_or_else(|e| panic!("login request failed: {e}"));
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_logout_ends_session() {
    let ctx = TestContext::new().await;
    ctx.login("admin@fibernet.in").await;
    assert_eq!(ctx.get("/auth/me").await.status(), StatusCode::OK);

    assert_eq!(ctx.post("/auth/logout").await.status(), StatusCode::NO_CONTENT);
    assert_eq!(ctx.get("/auth/me").await.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_roles_are_enforced() {
    let ctx = TestContext::new().await;
    ctx.login("tech@fibernet.in").await;
    for path in ["/api/customers", "/api/dashboard", "/api/invoices", "/api/follow-ups"] {
        assert_eq!(ctx.get(path).await.status(), StatusCode::FORBIDDEN, "{path}");
    }
    assert_eq!(ctx.get("/api/complaints").await.status(), StatusCode::OK);

    let ctx = TestContext::new().await;
    ctx.login("operator@fibernet.in").await;
    assert_eq!(ctx.get("/api/invoices").await.status(), StatusCode::OK);
    assert_eq!(ctx.get("/api/customers").await.status(), StatusCode::OK);
    for path in ["/api/operators", "/api/vendors", "/api/technicians", "/api/analytics/overview"] {
        assert_eq!(ctx.get(path).await.status(), StatusCode::FORBIDDEN, "{path}");
    }

    let ctx = TestContext::new().await;
    ctx.login("staff@fibernet.in").await;
    assert_eq!(ctx.get("/api/technicians").await.status(), StatusCode::OK);
    assert_eq!(ctx.get("/api/invoices").await.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_customer_cannot_reach_staff_pages() {
    let ctx = TestContext::new().await;
    let profile: Value = ctx.login("ravi@example.in").await;
    assert_eq!(profile["role"], "customer");
    assert_eq!(ctx.get("/api/customers").await.status(), StatusCode::FORBIDDEN);
    assert_eq!(ctx.get("/api/plans").await.status(), StatusCode::FORBIDDEN);
}
