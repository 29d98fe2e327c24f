//! Vendor onboarding routes (admin only).

use axum::{
    Json,
    extract::{Path, Query, State},
    response::Response,
};
use isp_console_core::{
    Vendor, VendorFilter, VendorSortKey, VendorStats, VendorStatus, VendorUpdate,
};
use tracing::instrument;

use super::listing::{ListParams, ListResponse, csv_download, facet, filter_and_sort};
use crate::error::AppError;
use crate::middleware::RequireRole;
use crate::middleware::auth::AdminOnly;
use crate::state::AppState;

pub type VendorList = ListResponse<Vendor, VendorStats>;

fn filtered<'a>(vendors: &'a [Vendor], params: &ListParams) -> Result<Vec<&'a Vendor>, AppError> {
    let filter = VendorFilter {
        search: params.search(),
        status: facet(params.status.as_deref())?,
        category: facet(params.category.as_deref())?,
    };
    let sort = params.sort_key(VendorSortKey::from_str_param)?;
    Ok(filter_and_sort(vendors, &filter, sort, params.direction()?))
}

fn vendor_list(vendors: &[Vendor], params: &ListParams) -> Result<VendorList, AppError> {
    let kept = filtered(vendors, params)?;
    Ok(ListResponse::new(vendors, &kept, VendorStats::from_records(vendors)))
}

#[instrument(skip(user, state))]
pub async fn list(
    RequireRole(user, _): RequireRole<AdminOnly>,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<VendorList>, AppError> {
    let vendors = state.backend().list_vendors(&user.token).await?;
    Ok(Json(vendor_list(&vendors, &params)?))
}

#[instrument(skip(user, state))]
pub async fn export(
    RequireRole(user, _): RequireRole<AdminOnly>,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response, AppError> {
    let vendors = state.backend().list_vendors(&user.token).await?;
    let kept = filtered(&vendors, &params)?;
    Ok(csv_download("vendors", &kept))
}

async fn change_status(
    state: &AppState,
    token: &str,
    id: &str,
    status: VendorStatus,
    params: &ListParams,
) -> Result<Json<VendorList>, AppError> {
    let backend = state.backend();
    backend
        .update_vendor(id, &VendorUpdate::status(status), token)
        .await?;
    tracing::info!(vendor = %id, %status, "vendor status changed");

    let vendors = backend.list_vendors(token).await?;
    Ok(Json(vendor_list(&vendors, params)?))
}

#[instrument(skip(user, state))]
pub async fn approve(
    RequireRole(user, _): RequireRole<AdminOnly>,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<VendorList>, AppError> {
    change_status(&state, &user.token, &id, VendorStatus::Active, &params).await
}

#[instrument(skip(user, state))]
pub async fn reject(
    RequireRole(user, _): RequireRole<AdminOnly>,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<VendorList>, AppError> {
    change_status(&state, &user.token, &id, VendorStatus::Rejected, &params).await
}

#[instrument(skip(user, state))]
pub async fn suspend(
    RequireRole(user, _): RequireRole<AdminOnly>,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<VendorList>, AppError> {
    change_status(&state, &user.token, &id, VendorStatus::Suspended, &params).await
}
