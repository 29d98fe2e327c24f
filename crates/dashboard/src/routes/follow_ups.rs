//! Customer follow-up task routes.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;
use isp_console_core::workflow::apply_status_change;
use isp_console_core::{FollowUp, FollowUpFilter, FollowUpSortKey, FollowUpStats, FollowUpStatus};
use serde::Serialize;
use tracing::instrument;

use super::listing::{ListParams, ListResponse, StatusUpdate, facet, filter_and_sort};
use crate::error::AppError;
use crate::middleware::RequireRole;
use crate::middleware::auth::StaffDesk;
use crate::state::AppState;

#[instrument(skip(user, state))]
pub async fn list(
    RequireRole(user, _): RequireRole<StaffDesk>,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse<FollowUp, FollowUpStats>>, AppError> {
    let follow_ups = state.backend().list_follow_ups(&user.token).await?;
    let filter = FollowUpFilter {
        search: params.search(),
        status: facet(params.status.as_deref())?,
        follow_up_type: facet(params.kind.as_deref())?,
        priority: facet(params.priority.as_deref())?,
    };
    let sort = params.sort_key(FollowUpSortKey::from_str_param)?;
    let kept = filter_and_sort(&follow_ups, &filter, sort, params.direction()?);

    let stats = FollowUpStats::from_records(&follow_ups, Utc::now().date_naive());
    Ok(Json(ListResponse::new(&follow_ups, &kept, stats)))
}

/// Result of a follow-up status change.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpStatusChanged {
    pub follow_up: FollowUp,
    pub previous: FollowUpStatus,
    pub stats: FollowUpStats,
}

/// Overwrite a follow-up's status.
#[instrument(skip(user, state, body))]
pub async fn change_status(
    RequireRole(user, _): RequireRole<StaffDesk>,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<StatusUpdate>,
) -> Result<Json<FollowUpStatusChanged>, AppError> {
    let status: FollowUpStatus = body.parse()?;
    let backend = state.backend();
    let mut follow_ups = backend.list_follow_ups(&user.token).await?;
    if !follow_ups.iter().any(|f| f.id.as_str() == id) {
        return Err(AppError::NotFound(format!("Follow-up {id}")));
    }

    backend
        .set_follow_up_status(&id, status, &user.token)
        .await?;

    let now = Utc::now();
    let change = apply_status_change(&mut follow_ups, &id, status, now)
        .ok_or_else(|| AppError::NotFound(format!("Follow-up {id}")))?;
    tracing::info!(
        follow_up = %id,
        from = %change.previous,
        to = %change.current,
        "follow-up status changed"
    );

    let stats = FollowUpStats::from_records(&follow_ups, now.date_naive());
    let follow_up = follow_ups
        .into_iter()
        .find(|f| f.id.as_str() == id)
        .ok_or_else(|| AppError::NotFound(format!("Follow-up {id}")))?;
    Ok(Json(FollowUpStatusChanged {
        follow_up,
        previous: change.previous,
        stats,
    }))
}
