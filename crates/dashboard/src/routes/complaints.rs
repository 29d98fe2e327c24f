//! Complaint ticket routes.
//!
//! Customers see only the tickets they raised and technicians only the
//! tickets assigned to them. Everyone else sees the full list. Stats are
//! computed over whatever the caller can see.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};
use chrono::Utc;
use isp_console_core::workflow::apply_status_change;
use isp_console_core::{
    Complaint, ComplaintFilter, ComplaintSortKey, ComplaintStats, ComplaintStatus, CustomerId,
    NewComplaint, Role,
};
use serde::Serialize;
use tracing::instrument;

use super::listing::{
    ListParams, ListResponse, StatusUpdate, bound, csv_download, facet, filter_and_sort,
};
use crate::error::AppError;
use crate::middleware::RequireRole;
use crate::middleware::auth::{ComplaintHandlers, ComplaintRaisers, ComplaintViewers};
use crate::models::CurrentUser;
use crate::state::AppState;

/// Whether the user may see this ticket.
fn visible_to(user: &CurrentUser, complaint: &Complaint) -> bool {
    let own = user.id.as_str();
    match user.role {
        Role::Customer => complaint
            .customer_id
            .as_ref()
            .is_some_and(|id| id.as_str() == own),
        Role::Technician => complaint
            .technician_id
            .as_ref()
            .is_some_and(|id| id.as_str() == own),
        Role::Admin | Role::Staff | Role::Operator => true,
    }
}

async fn visible_complaints(
    state: &AppState,
    user: &CurrentUser,
) -> Result<Vec<Complaint>, AppError> {
    let mut complaints = state.backend().list_complaints(&user.token).await?;
    complaints.retain(|c| visible_to(user, c));
    Ok(complaints)
}

fn filtered<'a>(
    complaints: &'a [Complaint],
    params: &ListParams,
) -> Result<Vec<&'a Complaint>, AppError> {
    let filter = ComplaintFilter {
        search: params.search(),
        status: facet(params.status.as_deref())?,
        complaint_type: facet(params.kind.as_deref())?,
        min_priority: bound(params.min_priority.as_deref())?,
        max_priority: bound(params.max_priority.as_deref())?,
        technician: facet(params.technician.as_deref())?,
    };
    let sort = params.sort_key(ComplaintSortKey::from_str_param)?;
    Ok(filter_and_sort(complaints, &filter, sort, params.direction()?))
}

#[instrument(skip(user, state))]
pub async fn list(
    RequireRole(user, _): RequireRole<ComplaintViewers>,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse<Complaint, ComplaintStats>>, AppError> {
    let complaints = visible_complaints(&state, &user).await?;
    let kept = filtered(&complaints, &params)?;
    Ok(Json(ListResponse::new(
        &complaints,
        &kept,
        ComplaintStats::from_records(&complaints),
    )))
}

#[instrument(skip(user, state))]
pub async fn export(
    RequireRole(user, _): RequireRole<ComplaintViewers>,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response, AppError> {
    let complaints = visible_complaints(&state, &user).await?;
    let kept = filtered(&complaints, &params)?;
    Ok(csv_download("complaints", &kept))
}

/// Fetch one ticket. Tickets the caller may not see are reported as missing.
#[instrument(skip(user, state))]
pub async fn show(
    RequireRole(user, _): RequireRole<ComplaintViewers>,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Complaint>, AppError> {
    let complaint = state.backend().get_complaint(&id, &user.token).await?;
    if !visible_to(&user, &complaint) {
        return Err(AppError::NotFound(format!("Complaint {id}")));
    }
    Ok(Json(complaint))
}

/// Raise a new ticket.
///
/// A customer always raises tickets for themselves, whatever the body says.
#[instrument(skip(user, state, complaint))]
pub async fn raise(
    RequireRole(user, _): RequireRole<ComplaintRaisers>,
    State(state): State<AppState>,
    Json(mut complaint): Json<NewComplaint>,
) -> Result<(StatusCode, Json<Complaint>), AppError> {
    complaint.complaint_type = complaint.complaint_type.trim().to_string();
    complaint.description = complaint.description.trim().to_string();
    if complaint.complaint_type.is_empty() {
        return Err(AppError::BadRequest("Complaint type is required".to_string()));
    }
    if complaint.description.is_empty() {
        return Err(AppError::BadRequest("Description is required".to_string()));
    }
    if user.is(Role::Customer) {
        complaint.customer_id = Some(CustomerId::new(user.id.as_str()));
    }

    let created = state
        .backend()
        .raise_complaint(&complaint, &user.token)
        .await?;
    tracing::info!(complaint = %created.id, priority = %created.priority, "complaint raised");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Result of a ticket status change.
#[derive(Debug, Serialize)]
pub struct ComplaintStatusChanged {
    pub complaint: Complaint,
    pub previous: ComplaintStatus,
    pub stats: ComplaintStats,
}

/// Overwrite a ticket's status.
///
/// Any status may follow any other. Only the targeted ticket changes; the
/// returned stats reflect the change.
#[instrument(skip(user, state, body))]
pub async fn change_status(
    RequireRole(user, _): RequireRole<ComplaintHandlers>,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<StatusUpdate>,
) -> Result<Json<ComplaintStatusChanged>, AppError> {
    let status: ComplaintStatus = body.parse()?;
    let mut complaints = visible_complaints(&state, &user).await?;
    if !complaints.iter().any(|c| c.id.as_str() == id) {
        return Err(AppError::NotFound(format!("Complaint {id}")));
    }

    state
        .backend()
        .set_complaint_status(&id, status, &user.token)
        .await?;

    let change = apply_status_change(&mut complaints, &id, status, Utc::now())
        .ok_or_else(|| AppError::NotFound(format!("Complaint {id}")))?;
    tracing::info!(
        complaint = %id,
        from = %change.previous,
        to = %change.current,
        "complaint status changed"
    );

    let stats = ComplaintStats::from_records(&complaints);
    let complaint = complaints
        .into_iter()
        .find(|c| c.id.as_str() == id)
        .ok_or_else(|| AppError::NotFound(format!("Complaint {id}")))?;
    Ok(Json(ComplaintStatusChanged {
        complaint,
        previous: change.previous,
        stats,
    }))
}
