//! Analytics report shapes returned by the backend's reporting endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Reporting window for time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "7d")]
    Week,
    #[default]
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "1y")]
    Year,
}

impl TimeRange {
    /// Parse a range from a URL parameter string.
    #[must_use]
    pub fn from_str_param(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "7d" | "week" => Some(Self::Week),
            "30d" | "month" => Some(Self::Month),
            "90d" | "quarter" => Some(Self::Quarter),
            "1y" | "365d" | "year" => Some(Self::Year),
            _ => None,
        }
    }

    /// Get the URL parameter string for this range.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Week => "7d",
            Self::Month => "30d",
            Self::Quarter => "90d",
            Self::Year => "1y",
        }
    }
}

/// Headline numbers for the analytics page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsOverview {
    pub total_revenue: Decimal,
    /// Revenue change over the previous period, in percent.
    pub revenue_growth: Decimal,
    pub total_customers: u64,
    pub active_customers: u64,
    pub new_customers: u64,
    /// Customers lost over the period, in percent.
    pub churn_rate: Decimal,
    pub total_operators: u64,
    pub open_complaints: u64,
}

/// One point of a revenue or growth series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesPoint {
    /// Bucket label as sent by the backend (`2026-01`, `W05`, ...).
    pub period: String,
    pub value: Decimal,
}

/// Share of subscribers on one plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanShare {
    pub plan: String,
    pub subscribers: u64,
    /// Share of all subscribers, in percent.
    #[serde(default)]
    pub percentage: Decimal,
}

/// Output format for generated reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Csv,
    Pdf,
    Xlsx,
}

/// Which report to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    #[default]
    Revenue,
    CustomerGrowth,
    PlanDistribution,
    Complaints,
}

/// A one-off report export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub kind: ReportKind,
    #[serde(default)]
    pub format: ReportFormat,
    #[serde(default)]
    pub range: TimeRange,
}

/// How often a scheduled report is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFrequency {
    Daily,
    Weekly,
    Monthly,
}

/// A recurring report delivered by email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSchedule {
    pub kind: ReportKind,
    #[serde(default)]
    pub format: ReportFormat,
    pub frequency: ReportFrequency,
    pub recipients: Vec<crate::Email>,
    pub start_date: Option<NaiveDate>,
}

/// The backend's acknowledgement of an export or schedule request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportHandle {
    pub id: String,
    pub status: String,
    /// Download location once the report is ready.
    pub url: Option<String>,
}

/// Attach percentages to a plan distribution that arrived without them.
pub fn fill_plan_percentages(shares: &mut [PlanShare]) {
    let total: u64 = shares.iter().map(|s| s.subscribers).sum();
    for share in shares.iter_mut() {
        if share.percentage.is_zero() {
            share.percentage = crate::listing::percentage(
                Decimal::from(share.subscribers),
                Decimal::from(total),
            );
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_time_range_params() {
        assert_eq!(TimeRange::from_str_param("90D"), Some(TimeRange::Quarter));
        assert_eq!(TimeRange::from_str_param("forever"), None);
        assert_eq!(TimeRange::Year.as_str(), "1y");
        assert_eq!(serde_json::to_string(&TimeRange::Week).unwrap(), "\"7d\"");
    }

    #[test]
    fn test_fill_plan_percentages() {
        let mut shares = vec![
            PlanShare {
                plan: "Basic".to_string(),
                subscribers: 30,
                percentage: Decimal::ZERO,
            },
            PlanShare {
                plan: "Pro".to_string(),
                subscribers: 10,
                percentage: Decimal::ZERO,
            },
        ];
        fill_plan_percentages(&mut shares);
        assert_eq!(shares[0].percentage, Decimal::from(75));
        assert_eq!(shares[1].percentage, Decimal::from(25));
    }

    #[test]
    fn test_report_request_defaults() {
        let req: ReportRequest = serde_json::from_str(r#"{"kind":"customer-growth"}"#).unwrap();
        assert_eq!(req.kind, ReportKind::CustomerGrowth);
        assert_eq!(req.format, ReportFormat::Csv);
        assert_eq!(req.range, TimeRange::Month);
    }
}
