//! Operator management routes (admin only).

use axum::{
    Json,
    extract::{Path, Query, State},
    response::Response,
};
use isp_console_core::{Operator, OperatorFilter, OperatorSortKey, OperatorStats, OperatorStatus};
use tracing::instrument;

use super::listing::{ListParams, ListResponse, csv_download, facet, filter_and_sort};
use crate::error::AppError;
use crate::middleware::RequireRole;
use crate::middleware::auth::AdminOnly;
use crate::state::AppState;

pub type OperatorList = ListResponse<Operator, OperatorStats>;

fn filtered<'a>(
    operators: &'a [Operator],
    params: &ListParams,
) -> Result<Vec<&'a Operator>, AppError> {
    let filter = OperatorFilter {
        search: params.search(),
        status: facet(params.status.as_deref())?,
        state: facet(params.state.as_deref())?,
        plan: facet(params.plan.as_deref())?,
    };
    let sort = params.sort_key(OperatorSortKey::from_str_param)?;
    Ok(filter_and_sort(operators, &filter, sort, params.direction()?))
}

fn operator_list(operators: &[Operator], params: &ListParams) -> Result<OperatorList, AppError> {
    let kept = filtered(operators, params)?;
    Ok(ListResponse::new(
        operators,
        &kept,
        OperatorStats::from_records(operators),
    ))
}

#[instrument(skip(user, state))]
pub async fn list(
    RequireRole(user, _): RequireRole<AdminOnly>,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<OperatorList>, AppError> {
    let operators = state.backend().list_operators(&user.token).await?;
    Ok(Json(operator_list(&operators, &params)?))
}

#[instrument(skip(user, state))]
pub async fn export(
    RequireRole(user, _): RequireRole<AdminOnly>,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response, AppError> {
    let operators = state.backend().list_operators(&user.token).await?;
    let kept = filtered(&operators, &params)?;
    Ok(csv_download("operators", &kept))
}

/// Remove an operator's profile, then return the refreshed list.
#[instrument(skip(user, state))]
pub async fn delete(
    RequireRole(user, _): RequireRole<AdminOnly>,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<OperatorList>, AppError> {
    let backend = state.backend();
    backend.delete_operator_profile(&id, &user.token).await?;
    tracing::info!(operator = %id, "operator profile deleted");

    let operators = backend.list_operators(&user.token).await?;
    Ok(Json(operator_list(&operators, &params)?))
}

async fn change_status(
    state: &AppState,
    token: &str,
    id: &str,
    status: OperatorStatus,
    params: &ListParams,
) -> Result<Json<OperatorList>, AppError> {
    let backend = state.backend();
    backend.set_operator_status(id, status, token).await?;
    tracing::info!(operator = %id, %status, "operator status changed");

    let operators = backend.list_operators(token).await?;
    Ok(Json(operator_list(&operators, params)?))
}

#[instrument(skip(user, state))]
pub async fn suspend(
    RequireRole(user, _): RequireRole<AdminOnly>,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<OperatorList>, AppError> {
    change_status(&state, &user.token, &id, OperatorStatus::Suspended, &params).await
}

#[instrument(skip(user, state))]
pub async fn activate(
    RequireRole(user, _): RequireRole<AdminOnly>,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<OperatorList>, AppError> {
    change_status(&state, &user.token, &id, OperatorStatus::Active, &params).await
}
