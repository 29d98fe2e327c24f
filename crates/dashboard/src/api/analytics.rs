//! Analytics and report endpoints.

use isp_console_core::analytics::{
    AnalyticsOverview, PlanShare, ReportHandle, ReportRequest, ReportSchedule, TimeRange,
    TimeSeriesPoint,
};
use tracing::instrument;

use super::conversions::{convert_plan_distribution, convert_series};
use super::types::{RawPlanShare, RawSeriesPoint};
use super::{IspApiClient, IspApiError};

impl IspApiClient {
    /// Fetch the headline analytics numbers.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, token))]
    pub async fn analytics_overview(&self, token: &str) -> Result<AnalyticsOverview, IspApiError> {
        self.get("/analytics/overview", token).await
    }

    /// Fetch the revenue series for a time range.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, token), fields(range = range.as_str()))]
    pub async fn revenue(
        &self,
        range: TimeRange,
        token: &str,
    ) -> Result<Vec<TimeSeriesPoint>, IspApiError> {
        let raw: Vec<RawSeriesPoint> = self
            .get_with_query("/analytics/revenue", &[("range", range.as_str())], token)
            .await?;
        Ok(convert_series(raw))
    }

    /// Fetch the customer growth series for a time range.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, token), fields(range = range.as_str()))]
    pub async fn customer_growth(
        &self,
        range: TimeRange,
        token: &str,
    ) -> Result<Vec<TimeSeriesPoint>, IspApiError> {
        let raw: Vec<RawSeriesPoint> = self
            .get_with_query("/analytics/customer-growth", &[("range", range.as_str())], token)
            .await?;
        Ok(convert_series(raw))
    }

    /// Fetch subscriber counts per plan.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, token))]
    pub async fn plan_distribution(&self, token: &str) -> Result<Vec<PlanShare>, IspApiError> {
        let raw: Vec<RawPlanShare> = self.get("/analytics/plan-distribution", token).await?;
        Ok(convert_plan_distribution(raw))
    }

    /// Request a one-off report export.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, token))]
    pub async fn export_report(
        &self,
        request: &ReportRequest,
        token: &str,
    ) -> Result<ReportHandle, IspApiError> {
        self.post("/analytics/reports/export", request, Some(token))
            .await
    }

    /// Schedule a recurring report.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, schedule, token), fields(kind = ?schedule.kind, frequency = ?schedule.frequency))]
    pub async fn schedule_report(
        &self,
        schedule: &ReportSchedule,
        token: &str,
    ) -> Result<ReportHandle, IspApiError> {
        self.post("/analytics/reports/schedule", schedule, Some(token))
            .await
    }
}
