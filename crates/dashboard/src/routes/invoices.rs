//! Operator invoice routes.

use axum::{
    Json,
    extract::{Query, State},
    response::Response,
};
use isp_console_core::{Invoice, InvoiceFilter, InvoiceSortKey, InvoiceStats};
use tracing::instrument;

use super::listing::{ListParams, ListResponse, csv_download, facet, filter_and_sort};
use crate::error::AppError;
use crate::middleware::RequireRole;
use crate::middleware::auth::Billing;
use crate::state::AppState;

fn filtered<'a>(invoices: &'a [Invoice], params: &ListParams) -> Result<Vec<&'a Invoice>, AppError> {
    let filter = InvoiceFilter {
        search: params.search(),
        status: facet(params.status.as_deref())?,
    };
    let sort = params.sort_key(InvoiceSortKey::from_str_param)?;
    Ok(filter_and_sort(invoices, &filter, sort, params.direction()?))
}

#[instrument(skip(user, state))]
pub async fn list(
    RequireRole(user, _): RequireRole<Billing>,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse<Invoice, InvoiceStats>>, AppError> {
    let invoices = state.backend().list_invoices(&user.token).await?;
    let kept = filtered(&invoices, &params)?;
    Ok(Json(ListResponse::new(
        &invoices,
        &kept,
        InvoiceStats::from_records(&invoices),
    )))
}

#[instrument(skip(user, state))]
pub async fn export(
    RequireRole(user, _): RequireRole<Billing>,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response, AppError> {
    let invoices = state.backend().list_invoices(&user.token).await?;
    let kept = filtered(&invoices, &params)?;
    Ok(csv_download("invoices", &kept))
}
