//! Technician roster routes.

use axum::{
    Json,
    extract::{Path, Query, State},
    response::Response,
};
use isp_console_core::{Technician, TechnicianFilter, TechnicianSortKey, TechnicianStats};
use tracing::instrument;

use super::listing::{ListParams, ListResponse, csv_download, facet, filter_and_sort};
use crate::error::AppError;
use crate::middleware::RequireRole;
use crate::middleware::auth::StaffDesk;
use crate::state::AppState;

pub type TechnicianList = ListResponse<Technician, TechnicianStats>;

fn filtered<'a>(
    technicians: &'a [Technician],
    params: &ListParams,
) -> Result<Vec<&'a Technician>, AppError> {
    let filter = TechnicianFilter {
        search: params.search(),
        status: facet(params.status.as_deref())?,
        department: facet(params.department.as_deref())?,
    };
    let sort = params.sort_key(TechnicianSortKey::from_str_param)?;
    Ok(filter_and_sort(technicians, &filter, sort, params.direction()?))
}

#[instrument(skip(user, state))]
pub async fn list(
    RequireRole(user, _): RequireRole<StaffDesk>,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<TechnicianList>, AppError> {
    let technicians = state.backend().list_technicians(&user.token).await?;
    let kept = filtered(&technicians, &params)?;
    Ok(Json(ListResponse::new(
        &technicians,
        &kept,
        TechnicianStats::from_records(&technicians),
    )))
}

#[instrument(skip(user, state))]
pub async fn export(
    RequireRole(user, _): RequireRole<StaffDesk>,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response, AppError> {
    let technicians = state.backend().list_technicians(&user.token).await?;
    let kept = filtered(&technicians, &params)?;
    Ok(csv_download("technicians", &kept))
}

#[instrument(skip(user, state))]
pub async fn show(
    RequireRole(user, _): RequireRole<StaffDesk>,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Technician>, AppError> {
    let technician = state.backend().get_technician(&id, &user.token).await?;
    Ok(Json(technician))
}

/// Remove a technician, then return the refreshed roster.
#[instrument(skip(user, state))]
pub async fn delete(
    RequireRole(user, _): RequireRole<StaffDesk>,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<TechnicianList>, AppError> {
    let backend = state.backend();
    backend.delete_technician(&id, &user.token).await?;
    tracing::info!(technician = %id, "technician deleted");

    let technicians = backend.list_technicians(&user.token).await?;
    let kept = filtered(&technicians, &params)?;
    Ok(Json(ListResponse::new(
        &technicians,
        &kept,
        TechnicianStats::from_records(&technicians),
    )))
}
