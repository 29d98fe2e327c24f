//! Overview dashboard route.

use axum::{Json, extract::State};
use chrono::Utc;
use tracing::instrument;

use crate::middleware::RequireRole;
use crate::middleware::auth::DashboardAccess;
use crate::services::{DashboardOverview, build_overview};
use crate::state::AppState;

/// Aggregate every section the user's role may see.
///
/// Never fails on upstream errors: broken sections are reported in
/// `warnings` and the rest of the overview is still returned.
#[instrument(skip(user, state), fields(role = %user.role))]
pub async fn overview(
    RequireRole(user, _): RequireRole<DashboardAccess>,
    State(state): State<AppState>,
) -> Json<DashboardOverview> {
    let overview = build_overview(
        state.backend(),
        user.role,
        &user.token,
        Utc::now().date_naive(),
    )
    .await;
    if !overview.warnings.is_empty() {
        tracing::warn!(
            failed = overview.warnings.len(),
            "Dashboard served with missing sections"
        );
    }
    Json(overview)
}
