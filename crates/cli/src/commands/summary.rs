//! Dashboard summary on the command line.

use std::fmt::Write as _;
use std::io::Write;

use chrono::Utc;
use isp_console_core::{Money, Role};
use isp_console_dashboard::services::{DashboardOverview, build_overview};

use super::{CommandError, connect};

/// Render the overview as plain text, one figure per line.
pub fn format_summary(overview: &DashboardOverview) -> String {
    let mut out = String::new();
    let metrics = &overview.metrics;
    let _ = writeln!(out, "Customers:         {}", metrics.customers);
    let _ = writeln!(out, "Monthly revenue:   {}", metrics.monthly_revenue);
    let _ = writeln!(out, "Outstanding:       {}", metrics.outstanding);
    let _ = writeln!(out, "Open complaints:   {}", metrics.open_complaints);

    if let Some(stats) = &overview.operators {
        let _ = writeln!(
            out,
            "Operators:         {} ({} active, {}% capacity used)",
            stats.total, stats.active, stats.capacity_utilization
        );
    }
    if let Some(stats) = &overview.invoices {
        let _ = writeln!(
            out,
            "Invoices:          {} ({} overdue, {}% collected, {} pending)",
            stats.total,
            stats.overdue,
            stats.collection_rate,
            Money::inr(stats.pending_amount)
        );
    }
    if let Some(stats) = &overview.follow_ups {
        let _ = writeln!(
            out,
            "Follow-ups:        {} ({} overdue)",
            stats.total, stats.overdue
        );
    }
    if let Some(stats) = &overview.plans {
        let _ = writeln!(
            out,
            "Plans:             {} ({} subscribers)",
            stats.total, stats.total_subscribers
        );
    }

    for warning in &overview.warnings {
        let _ = writeln!(
            out,
            "warning: {} could not be loaded: {}",
            warning.section, warning.message
        );
    }
    out
}

/// Print the admin overview.
///
/// # Errors
///
/// Returns `CommandError` if the configuration is invalid or stdout cannot
/// be written. Sections that fail to load are reported as warnings.
pub async fn run() -> Result<(), CommandError> {
    let conn = connect()?;
    let overview = build_overview(
        &conn.client,
        Role::Admin,
        &conn.token,
        Utc::now().date_naive(),
    )
    .await;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(format_summary(&overview).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use isp_console_core::OperatorStats;
    use isp_console_dashboard::services::SectionWarning;

    use super::*;

    #[test]
    fn test_summary_lists_metrics_and_warnings() {
        let mut overview = DashboardOverview::default();
        overview.metrics.customers = "2".to_string();
        overview.operators = Some(OperatorStats::default());
        overview.warnings.push(SectionWarning {
            section: "invoices",
            message: "ISP backend error: timed out".to_string(),
        });

        let text = format_summary(&overview);
        assert!(text.contains("Customers:         2"));
        assert!(text.contains("Monthly revenue:   ₹0.00"));
        assert!(text.contains("Operators:         0"));
        assert!(!text.contains("Invoices:"));
        assert!(text.contains("warning: invoices could not be loaded"));
    }
}
