//! Analytics and reporting routes (admin only).

use axum::{
    Json,
    extract::{Query, State},
};
use isp_console_core::analytics::{
    AnalyticsOverview, PlanShare, ReportHandle, ReportRequest, ReportSchedule, TimeRange,
    TimeSeriesPoint,
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::middleware::RequireRole;
use crate::middleware::auth::AdminOnly;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RangeParams {
    pub range: Option<String>,
}

impl RangeParams {
    fn range(&self) -> Result<TimeRange, AppError> {
        match self.range.as_deref().map(str::trim) {
            None | Some("") => Ok(TimeRange::default()),
            Some(value) => TimeRange::from_str_param(value)
                .ok_or_else(|| AppError::BadRequest(format!("invalid range {value:?}"))),
        }
    }
}

#[instrument(skip(user, state))]
pub async fn overview(
    RequireRole(user, _): RequireRole<AdminOnly>,
    State(state): State<AppState>,
) -> Result<Json<AnalyticsOverview>, AppError> {
    Ok(Json(state.backend().analytics_overview(&user.token).await?))
}

#[instrument(skip(user, state))]
pub async fn revenue(
    RequireRole(user, _): RequireRole<AdminOnly>,
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> Result<Json<Vec<TimeSeriesPoint>>, AppError> {
    let range = params.range()?;
    Ok(Json(state.backend().revenue(range, &user.token).await?))
}

#[instrument(skip(user, state))]
pub async fn customer_growth(
    RequireRole(user, _): RequireRole<AdminOnly>,
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> Result<Json<Vec<TimeSeriesPoint>>, AppError> {
    let range = params.range()?;
    Ok(Json(state.backend().customer_growth(range, &user.token).await?))
}

/// Subscribers per plan. The backend layer has already filled in any
/// percentages the ISP backend left out.
#[instrument(skip(user, state))]
pub async fn plan_distribution(
    RequireRole(user, _): RequireRole<AdminOnly>,
    State(state): State<AppState>,
) -> Result<Json<Vec<PlanShare>>, AppError> {
    Ok(Json(state.backend().plan_distribution(&user.token).await?))
}

#[instrument(skip(user, state))]
pub async fn export_report(
    RequireRole(user, _): RequireRole<AdminOnly>,
    State(state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> Result<Json<ReportHandle>, AppError> {
    let handle = state
        .backend()
        .export_report(&request, &user.token)
        .await?;
    tracing::info!(report = %handle.id, "report export requested");
    Ok(Json(handle))
}

#[instrument(skip(user, state))]
pub async fn schedule_report(
    RequireRole(user, _): RequireRole<AdminOnly>,
    State(state): State<AppState>,
    Json(schedule): Json<ReportSchedule>,
) -> Result<Json<ReportHandle>, AppError> {
    if schedule.recipients.is_empty() {
        return Err(AppError::BadRequest(
            "At least one recipient is required".to_string(),
        ));
    }
    let handle = state
        .backend()
        .schedule_report(&schedule, &user.token)
        .await?;
    tracing::info!(report = %handle.id, recipients = schedule.recipients.len(), "report scheduled");
    Ok(Json(handle))
}
