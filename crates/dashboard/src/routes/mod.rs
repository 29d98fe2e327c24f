//! HTTP route handlers for the dashboard.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                          - Liveness
//! GET    /health/ready                    - ISP backend reachability
//!
//! # Auth
//! POST   /auth/login                      - Sign in with email and password
//! POST   /auth/logout                     - Sign out
//! GET    /auth/me                         - Current user
//!
//! # Overview
//! GET    /api/dashboard                   - All-settled overview
//! GET    /api/tables/{table_id}           - Table column and filter config
//!
//! # Accounts
//! GET    /api/customers[/export]          - List / CSV
//! GET    /api/customers/{id}              - Detail
//! PUT    /api/customers/{id}              - Edit
//! DELETE /api/customers/{id}              - Delete
//! POST   /api/customers/{id}/suspend      - Suspend connection
//! POST   /api/customers/{id}/activate     - Reactivate connection
//! GET    /api/operators[/export]          - List / CSV (admin)
//! DELETE /api/operators/{id}              - Delete profile (admin)
//! POST   /api/operators/{id}/suspend      - Suspend (admin)
//! POST   /api/operators/{id}/activate     - Reactivate (admin)
//! GET    /api/technicians[/export]        - List / CSV
//! GET    /api/technicians/{id}            - Detail
//! DELETE /api/technicians/{id}            - Delete
//! GET    /api/vendors[/export]            - List / CSV (admin)
//! POST   /api/vendors/{id}/approve        - Approve (admin)
//! POST   /api/vendors/{id}/reject         - Reject (admin)
//! POST   /api/vendors/{id}/suspend        - Suspend (admin)
//!
//! # Billing
//! GET    /api/invoices[/export]           - List / CSV
//! GET    /api/plans[/export]              - List / CSV
//!
//! # Support
//! GET    /api/complaints[/export]         - List / CSV
//! POST   /api/complaints                  - Raise a ticket
//! GET    /api/complaints/{id}             - Detail
//! PATCH  /api/complaints/{id}/status      - Overwrite status
//! GET    /api/follow-ups                  - List
//! PATCH  /api/follow-ups/{id}/status      - Overwrite status
//!
//! # Analytics (admin)
//! GET    /api/analytics/overview
//! GET    /api/analytics/revenue?range=
//! GET    /api/analytics/customer-growth?range=
//! GET    /api/analytics/plan-distribution
//! POST   /api/analytics/reports/export
//! POST   /api/analytics/reports/schedule
//! ```

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::state::AppState;

pub mod analytics;
pub mod auth;
pub mod complaints;
pub mod customers;
pub mod dashboard;
pub mod follow_ups;
pub mod health;
pub mod invoices;
pub mod listing;
pub mod operators;
pub mod plans;
pub mod tables;
pub mod technicians;
pub mod vendors;

/// Build the dashboard router. Health probes are mounted separately.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Auth
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::me))
        // Overview
        .route("/api/dashboard", get(dashboard::overview))
        .route("/api/tables/{table_id}", get(tables::show))
        // Customers
        .route("/api/customers", get(customers::list))
        .route("/api/customers/export", get(customers::export))
        .route(
            "/api/customers/{id}",
            get(customers::show)
                .put(customers::update)
                .delete(customers::delete),
        )
        .route("/api/customers/{id}/suspend", post(customers::suspend))
        .route("/api/customers/{id}/activate", post(customers::activate))
        // Operators
        .route("/api/operators", get(operators::list))
        .route("/api/operators/export", get(operators::export))
        .route("/api/operators/{id}", delete(operators::delete))
        .route("/api/operators/{id}/suspend", post(operators::suspend))
        .route("/api/operators/{id}/activate", post(operators::activate))
        // Technicians
        .route("/api/technicians", get(technicians::list))
        .route("/api/technicians/export", get(technicians::export))
        .route(
            "/api/technicians/{id}",
            get(technicians::show).delete(technicians::delete),
        )
        // Vendors
        .route("/api/vendors", get(vendors::list))
        .route("/api/vendors/export", get(vendors::export))
        .route("/api/vendors/{id}/approve", post(vendors::approve))
        .route("/api/vendors/{id}/reject", post(vendors::reject))
        .route("/api/vendors/{id}/suspend", post(vendors::suspend))
        // Billing
        .route("/api/invoices", get(invoices::list))
        .route("/api/invoices/export", get(invoices::export))
        .route("/api/plans", get(plans::list))
        .route("/api/plans/export", get(plans::export))
        // Complaints
        .route(
            "/api/complaints",
            get(complaints::list).post(complaints::raise),
        )
        .route("/api/complaints/export", get(complaints::export))
        .route("/api/complaints/{id}", get(complaints::show))
        .route(
            "/api/complaints/{id}/status",
            patch(complaints::change_status),
        )
        // Follow-ups
        .route("/api/follow-ups", get(follow_ups::list))
        .route(
            "/api/follow-ups/{id}/status",
            patch(follow_ups::change_status),
        )
        // Analytics
        .route("/api/analytics/overview", get(analytics::overview))
        .route("/api/analytics/revenue", get(analytics::revenue))
        .route(
            "/api/analytics/customer-growth",
            get(analytics::customer_growth),
        )
        .route(
            "/api/analytics/plan-distribution",
            get(analytics::plan_distribution),
        )
        .route(
            "/api/analytics/reports/export",
            post(analytics::export_report),
        )
        .route(
            "/api/analytics/reports/schedule",
            post(analytics::schedule_report),
        )
}
