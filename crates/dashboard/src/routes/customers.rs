//! Customer management routes.

use axum::{
    Json,
    extract::{Path, Query, State},
    response::Response,
};
use isp_console_core::{
    ConnectionStatus, Customer, CustomerFilter, CustomerSortKey, CustomerStats, CustomerUpdate,
};
use tracing::instrument;

use super::listing::{ListParams, ListResponse, csv_download, facet, filter_and_sort};
use crate::error::AppError;
use crate::middleware::RequireRole;
use crate::middleware::auth::CustomerDesk;
use crate::state::AppState;

pub type CustomerList = ListResponse<Customer, CustomerStats>;

fn customer_filter(params: &ListParams) -> Result<CustomerFilter, AppError> {
    Ok(CustomerFilter {
        search: params.search(),
        status: facet(params.status.as_deref())?,
        plan: facet(params.plan.as_deref())?,
    })
}

fn filtered<'a>(
    customers: &'a [Customer],
    params: &ListParams,
) -> Result<Vec<&'a Customer>, AppError> {
    let filter = customer_filter(params)?;
    let sort = params.sort_key(CustomerSortKey::from_str_param)?;
    Ok(filter_and_sort(customers, &filter, sort, params.direction()?))
}

fn customer_list(customers: &[Customer], params: &ListParams) -> Result<CustomerList, AppError> {
    let kept = filtered(customers, params)?;
    Ok(ListResponse::new(
        customers,
        &kept,
        CustomerStats::from_records(customers),
    ))
}

/// List customers.
#[instrument(skip(user, state))]
pub async fn list(
    RequireRole(user, _): RequireRole<CustomerDesk>,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<CustomerList>, AppError> {
    let customers = state.backend().list_customers(&user.token).await?;
    Ok(Json(customer_list(&customers, &params)?))
}

/// Download the filtered customers as CSV.
#[instrument(skip(user, state))]
pub async fn export(
    RequireRole(user, _): RequireRole<CustomerDesk>,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response, AppError> {
    let customers = state.backend().list_customers(&user.token).await?;
    let kept = filtered(&customers, &params)?;
    Ok(csv_download("customers", &kept))
}

/// Fetch one customer.
#[instrument(skip(user, state))]
pub async fn show(
    RequireRole(user, _): RequireRole<CustomerDesk>,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, AppError> {
    let customer = state.backend().get_customer(&id, &user.token).await?;
    Ok(Json(customer))
}

/// Edit a customer, then return the refreshed list.
#[instrument(skip(user, state, update))]
pub async fn update(
    RequireRole(user, _): RequireRole<CustomerDesk>,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ListParams>,
    Json(update): Json<CustomerUpdate>,
) -> Result<Json<CustomerList>, AppError> {
    if update.is_empty() {
        return Err(AppError::BadRequest("No fields to update".to_string()));
    }
    let backend = state.backend();
    backend.update_customer(&id, &update, &user.token).await?;
    tracing::info!(customer = %id, "customer updated");

    let customers = backend.list_customers(&user.token).await?;
    Ok(Json(customer_list(&customers, &params)?))
}

/// Delete a customer, then return the refreshed list.
#[instrument(skip(user, state))]
pub async fn delete(
    RequireRole(user, _): RequireRole<CustomerDesk>,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<CustomerList>, AppError> {
    let backend = state.backend();
    backend.delete_customer(&id, &user.token).await?;
    tracing::info!(customer = %id, "customer deleted");

    let customers = backend.list_customers(&user.token).await?;
    Ok(Json(customer_list(&customers, &params)?))
}

async fn change_status(
    state: &AppState,
    token: &str,
    id: &str,
    status: ConnectionStatus,
    params: &ListParams,
) -> Result<Json<CustomerList>, AppError> {
    let backend = state.backend();
    backend.set_customer_status(id, status, token).await?;
    tracing::info!(customer = %id, %status, "customer status changed");

    let customers = backend.list_customers(token).await?;
    Ok(Json(customer_list(&customers, params)?))
}

/// Suspend a customer's connection.
#[instrument(skip(user, state))]
pub async fn suspend(
    RequireRole(user, _): RequireRole<CustomerDesk>,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<CustomerList>, AppError> {
    change_status(&state, &user.token, &id, ConnectionStatus::Suspended, &params).await
}

/// Reactivate a customer's connection.
#[instrument(skip(user, state))]
pub async fn activate(
    RequireRole(user, _): RequireRole<CustomerDesk>,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<CustomerList>, AppError> {
    change_status(&state, &user.token, &id, ConnectionStatus::Active, &params).await
}
