//! Subscription plan catalogue routes.

use axum::{
    Json,
    extract::{Query, State},
    response::Response,
};
use isp_console_core::{Plan, PlanFilter, PlanSortKey, PlanStats};
use tracing::instrument;

use super::listing::{ListParams, ListResponse, csv_download, facet, filter_and_sort};
use crate::error::AppError;
use crate::middleware::RequireRole;
use crate::middleware::auth::CustomerDesk;
use crate::state::AppState;

fn filtered<'a>(plans: &'a [Plan], params: &ListParams) -> Result<Vec<&'a Plan>, AppError> {
    let filter = PlanFilter {
        search: params.search(),
        plan_type: facet(params.kind.as_deref())?,
    };
    let sort = params.sort_key(PlanSortKey::from_str_param)?;
    Ok(filter_and_sort(plans, &filter, sort, params.direction()?))
}

#[instrument(skip(user, state))]
pub async fn list(
    RequireRole(user, _): RequireRole<CustomerDesk>,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse<Plan, PlanStats>>, AppError> {
    let plans = state.backend().list_plans(&user.token).await?;
    let kept = filtered(&plans, &params)?;
    Ok(Json(ListResponse::new(
        &plans,
        &kept,
        PlanStats::from_records(&plans),
    )))
}

#[instrument(skip(user, state))]
pub async fn export(
    RequireRole(user, _): RequireRole<CustomerDesk>,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response, AppError> {
    let plans = state.backend().list_plans(&user.token).await?;
    let kept = filtered(&plans, &params)?;
    Ok(csv_download("plans", &kept))
}
