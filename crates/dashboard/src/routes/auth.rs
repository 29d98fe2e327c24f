//! Login, logout and the current-user lookup.
//!
//! Credentials are checked by the ISP backend. On success the user and
//! their backend token are kept in the server-side session; the browser
//! only ever holds the session cookie.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::api::IspApiError;
use crate::error::{AppError, clear_sentry_user, set_sentry_user};
use crate::middleware::{RequireAuth, clear_current_user, set_current_user};
use crate::models::{CurrentUser, UserProfile};
use crate::state::AppState;

/// Login form.
#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Sign in against the ISP backend.
#[instrument(skip(state, session, form), fields(email = %form.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<LoginForm>,
) -> Result<Json<UserProfile>, AppError> {
    let email = form.email.trim();
    if email.is_empty() || form.password.is_empty() {
        return Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    let result = match state.backend().login(email, &form.password).await {
        Ok(result) => result,
        Err(IspApiError::Unauthorized | IspApiError::NotFound(_)) => {
            tracing::warn!("Login rejected by backend");
            return Err(AppError::Unauthorized(
                "Invalid email or password".to_string(),
            ));
        }
        Err(e) => return Err(e.into()),
    };

    let user = CurrentUser::from(result);
    set_current_user(&session, &user).await?;
    set_sentry_user(user.id.as_str(), user.email.as_ref().map(|e| e.as_str()));
    tracing::info!(user_id = %user.id, role = %user.role, "User logged in");

    Ok(Json(UserProfile::from(&user)))
}

/// Sign out. Always succeeds, even without a session.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<StatusCode, AppError> {
    clear_current_user(&session).await?;
    clear_sentry_user();
    Ok(StatusCode::NO_CONTENT)
}

/// The signed-in user, without their token.
pub async fn me(RequireAuth(user): RequireAuth) -> Json<UserProfile> {
    Json(UserProfile::from(&user))
}
