//! CSV downloads for every exportable list.

use isp_console_integration_tests::TestContext;
use reqwest::{StatusCode, header};

/// Fetch a CSV export, check the download headers and return its lines.
async fn csv_lines(ctx: &TestContext, path: &str, entity: &str) -> Vec<String> {
    let resp = ctx.get(path).await;
    assert_eq!(resp.status(), StatusCode::OK, "GET {path}");

    let content_type = resp.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/csv"), "{content_type}");
    let disposition = resp.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap_or_default()
        .to_string();
    assert!(
        disposition.starts_with(&format!("attachment; filename=\"{entity}-")),
        "{disposition}"
    );

    let csv = resp.text().await.unwrap_or_default();
    csv.lines().map(str::to_string).collect()
}

#[tokio::test]
async fn test_invoice_export() {
    let ctx = TestContext::new().await;
    ctx.login("operator@fibernet.in").await;

    let lines = csv_lines(&ctx, "/api/invoices/export?status=overdue", "invoices").await;
    assert_eq!(
        lines,
        [
            "Invoice ID,Operator,Amount,GST,Total,Issue Date,Due Date,Paid Date,Status",
            "INV-2,Coastal Net,5000,900,5900,2026-02-01,2026-02-15,,overdue",
        ]
    );

    ctx.login("staff@fibernet.in").await;
    let resp = ctx.get("/api/invoices/export").await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_plan_export_filters_by_type() {
    let ctx = TestContext::new().await;
    ctx.login("staff@fibernet.in").await;

    let lines = csv_lines(&ctx, "/api/plans/export?type=business", "plans").await;
    assert_eq!(
        lines,
        [
            "Plan ID,Name,Speed,Type,Price,Max Connections,Subscribers,Features",
            "p-2,Fiber 200,200 Mbps,business,999,0,1,",
        ]
    );

    let lines = csv_lines(&ctx, "/api/plans/export", "plans").await;
    assert_eq!(lines.len(), 3);

    ctx.login("tech@fibernet.in").await;
    let resp = ctx.get("/api/plans/export").await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_complaint_export_is_scoped_to_caller() {
    let ctx = TestContext::new().await;
    ctx.login("ravi@example.in").await;

    let lines = csv_lines(&ctx, "/api/complaints/export", "complaints").await;
    assert_eq!(
        lines.first().map(String::as_str),
        Some("Complaint ID,Type,Description,Priority,Status,Technician,Created,Updated,Rating")
    );
    assert_eq!(
        lines.get(1).map(String::as_str),
        Some(
            "CMP-1,connectivity,Connection drops every evening (CMP-1),high,open,t-1,\
             2026-03-01 09:00,2026-03-01 09:00,"
        )
    );
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().skip(1).all(|l| !l.starts_with("CMP-2")));

    ctx.login("admin@fibernet.in").await;
    let lines = csv_lines(&ctx, "/api/complaints/export?status=in-progress", "complaints").await;
    assert_eq!(lines.len(), 2);
    assert!(lines.get(1).is_some_and(|l| l.starts_with("CMP-2,")));
}

#[tokio::test]
async fn test_operator_export() {
    let ctx = TestContext::new().await;
    ctx.login("admin@fibernet.in").await;

    let lines = csv_lines(&ctx, "/api/operators/export?state=Kerala", "operators").await;
    assert_eq!(
        lines,
        [
            "Operator ID,Company,Owner,Email,Phone,State,District,Area,Plan,Customers,Capacity,Revenue,Status",
            "op-2,Coastal Net,Farah Khan,,,Kerala,Kochi,Kakkanad,Silver,20,100,40000,suspended",
        ]
    );

    ctx.login("operator@fibernet.in").await;
    let resp = ctx.get("/api/operators/export").await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_technician_export() {
    let ctx = TestContext::new().await;
    ctx.login("staff@fibernet.in").await;

    let lines = csv_lines(&ctx, "/api/technicians/export?department=Network", "technicians").await;
    assert_eq!(
        lines.first().map(String::as_str),
        Some("Employee ID,Name,Email,Phone,Department,Position,Area,Salary,Status,Skills")
    );
    assert_eq!(lines.len(), 2);
    let row = lines.get(1).cloned().unwrap_or_default();
    assert!(row.starts_with("EMP-102,Lakshmi Menon,"), "{row}");
    assert!(row.contains(",Network,"), "{row}");
    assert!(row.contains(",Whitefield,41000,on-leave,"), "{row}");

    ctx.login("operator@fibernet.in").await;
    let resp = ctx.get("/api/technicians/export").await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_vendor_export() {
    let ctx = TestContext::new().await;
    ctx.login("admin@fibernet.in").await;

    let lines = csv_lines(&ctx, "/api/vendors/export?category=Cables", "vendors").await;
    assert_eq!(
        lines,
        [
            "Vendor ID,Name,Email,Category,Products,Orders,Revenue,Commission %,Rating,Status",
            "v-1,OptiCable Supplies,,Cables,0,0,50000,10,4.5,pending",
        ]
    );

    let lines = csv_lines(&ctx, "/api/vendors/export?status=active", "vendors").await;
    assert_eq!(lines.len(), 2);
    assert!(lines.get(1).is_some_and(|l| l.starts_with("v-2,RouterHub,")));

    ctx.login("staff@fibernet.in").await;
    let resp = ctx.get("/api/vendors/export").await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}
