//! The overview dashboard.
//!
//! Fetches every section the user's role may see concurrently and joins
//! them all-settled: a failing endpoint leaves its section empty and adds a
//! warning, the other sections still fill in.

use std::future::Future;

use chrono::NaiveDate;
use isp_console_core::view::ListView;
use isp_console_core::{
    Complaint, ComplaintStats, CustomerStats, FollowUpStats, InvoiceStats,
    Money, OperatorStats, PlanStats, Role,
};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::api::IspApiError;
use crate::backend::IspBackend;

/// How many recent complaints the overview lists.
const RECENT_COMPLAINTS: usize = 5;

/// A section that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionWarning {
    pub section: &'static str,
    pub message: String,
}

/// Headline cards, formatted for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub customers: String,
    pub monthly_revenue: String,
    pub outstanding: String,
    pub open_complaints: String,
}

impl Default for DashboardMetrics {
    fn default() -> Self {
        Self {
            customers: "0".to_string(),
            monthly_revenue: Money::inr(Decimal::ZERO).to_string(),
            outstanding: Money::inr(Decimal::ZERO).to_string(),
            open_complaints: "0".to_string(),
        }
    }
}

/// Everything the overview page shows.
///
/// Sections the role may not see are `None`; sections that failed to load
/// are present with empty statistics and listed in `warnings`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub metrics: DashboardMetrics,
    pub customers: Option<CustomerStats>,
    pub operators: Option<OperatorStats>,
    pub invoices: Option<InvoiceStats>,
    pub complaints: Option<ComplaintStats>,
    pub plans: Option<PlanStats>,
    pub follow_ups: Option<FollowUpStats>,
    pub recent_complaints: Vec<Complaint>,
    pub warnings: Vec<SectionWarning>,
}

/// Run `fetch` only when the section is visible.
async fn fetch_if<T, F>(visible: bool, fetch: F) -> Option<Result<Vec<T>, IspApiError>>
where
    F: Future<Output = Result<Vec<T>, IspApiError>>,
{
    if visible { Some(fetch.await) } else { None }
}

/// Fold one section's result into a list view, recording a warning on failure.
fn settle<T>(
    section: &'static str,
    result: Option<Result<Vec<T>, IspApiError>>,
    warnings: &mut Vec<SectionWarning>,
) -> Option<ListView<T>> {
    let view = ListView::default().settled(result?);
    if let Some(message) = &view.error {
        tracing::warn!(section, error = %message, "Dashboard section failed to load");
        warnings.push(SectionWarning {
            section,
            message: message.clone(),
        });
    }
    Some(view)
}

/// Build the overview for a user with `role`.
pub async fn build_overview(
    backend: &dyn IspBackend,
    role: Role,
    token: &str,
    today: NaiveDate,
) -> DashboardOverview {
    let admin = role == Role::Admin;
    let staff = matches!(role, Role::Admin | Role::Staff);
    let billing = matches!(role, Role::Admin | Role::Operator);

    let (customers, operators, invoices, complaints, plans, follow_ups) = tokio::join!(
        fetch_if(true, backend.list_customers(token)),
        fetch_if(admin, backend.list_operators(token)),
        fetch_if(billing, backend.list_invoices(token)),
        fetch_if(true, backend.list_complaints(token)),
        fetch_if(true, backend.list_plans(token)),
        fetch_if(staff, backend.list_follow_ups(token)),
    );

    let mut warnings = Vec::new();
    let customers = settle("customers", customers, &mut warnings);
    let operators = settle("operators", operators, &mut warnings);
    let invoices = settle("invoices", invoices, &mut warnings);
    let complaints = settle("complaints", complaints, &mut warnings);
    let plans = settle("plans", plans, &mut warnings);
    let follow_ups = settle("followUps", follow_ups, &mut warnings);

    let customer_stats = customers
        .as_ref()
        .map(|v| CustomerStats::from_records(&v.records));
    let complaint_stats = complaints
        .as_ref()
        .map(|v| ComplaintStats::from_records(&v.records));

    let mut metrics = DashboardMetrics::default();
    if let Some(stats) = &customer_stats {
        metrics.customers = stats.total.to_string();
        metrics.monthly_revenue = Money::inr(stats.total_revenue).to_string();
        metrics.outstanding = Money::inr(stats.total_outstanding).to_string();
    }
    if let Some(stats) = &complaint_stats {
        metrics.open_complaints = (stats.open + stats.in_progress).to_string();
    }

    let recent_complaints = complaints.as_ref().map_or_else(Vec::new, |v| {
        let mut recent: Vec<&Complaint> = v.records.iter().collect();
        // Newest first; undated complaints last.
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent.into_iter().take(RECENT_COMPLAINTS).cloned().collect()
    });

    DashboardOverview {
        metrics,
        customers: customer_stats,
        operators: operators.map(|v| OperatorStats::from_records(&v.records)),
        invoices: invoices.map(|v| InvoiceStats::from_records(&v.records)),
        complaints: complaint_stats,
        plans: plans.map(|v| PlanStats::from_records(&v.records)),
        follow_ups: follow_ups.map(|v| FollowUpStats::from_records(&v.records, today)),
        recent_complaints,
        warnings,
    }
}
