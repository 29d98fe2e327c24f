//! Authentication and role extractors.
//!
//! Routes declare who may call them through the extractor they take:
//! [`RequireAuth`] for any logged-in user, [`RequireRole<P>`] for the
//! roles listed by policy `P`. Missing sessions get 401, wrong roles 403.

use std::marker::PhantomData;

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use isp_console_core::Role;
use tower_sessions::Session;

use crate::models::{CurrentUser, session_keys};

/// Error returned when a request lacks the required login or role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    /// No logged-in user.
    Unauthorized,
    /// Logged in, but with a role this route does not allow.
    Forbidden,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, "Login required").into_response(),
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                "Your role does not have access to this resource",
            )
                .into_response(),
        }
    }
}

async fn current_user(parts: &Parts) -> Result<CurrentUser, AuthRejection> {
    let session = parts
        .extensions
        .get::<Session>()
        .ok_or(AuthRejection::Unauthorized)?;

    session
        .get::<CurrentUser>(session_keys::CURRENT_USER)
        .await
        .ok()
        .flatten()
        .ok_or(AuthRejection::Unauthorized)
}

/// Extractor that requires a logged-in user of any role.
///
/// # Example
///
/// ```rust,ignore
/// async fn me(RequireAuth(user): RequireAuth) -> impl IntoResponse {
///     format!("Hello, {}!", user.name)
/// }
/// ```
pub struct RequireAuth(pub CurrentUser);

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(current_user(parts).await?))
    }
}

/// A set of roles allowed through [`RequireRole`].
pub trait RolePolicy: Send + Sync + 'static {
    /// Roles that pass.
    const ALLOWED: &'static [Role];

    /// Whether `role` passes this policy.
    #[must_use]
    fn allows(role: Role) -> bool {
        Self::ALLOWED.contains(&role)
    }
}

/// Extractor that requires a logged-in user whose role `P` allows.
///
/// # Example
///
/// ```rust,ignore
/// async fn list(RequireRole(user, _): RequireRole<CustomerDesk>) -> impl IntoResponse {
///     format!("{} may see customers", user.name)
/// }
/// ```
pub struct RequireRole<P>(pub CurrentUser, pub PhantomData<P>);

impl<S, P> FromRequestParts<S> for RequireRole<P>
where
    S: Send + Sync,
    P: RolePolicy,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = current_user(parts).await?;
        if !P::allows(user.role) {
            tracing::debug!(
                user_id = %user.id,
                role = %user.role,
                path = parts.uri.path(),
                "Role not allowed"
            );
            return Err(AuthRejection::Forbidden);
        }
        Ok(Self(user, PhantomData))
    }
}

macro_rules! role_policy {
    ($(#[$meta:meta])* $name:ident => [$($role:ident),+ $(,)?]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl RolePolicy for $name {
            const ALLOWED: &'static [Role] = &[$(Role::$role),+];
        }
    };
}

role_policy! {
    /// Platform administration: operators, vendors, analytics.
    AdminOnly => [Admin]
}

role_policy! {
    /// The overview dashboard.
    DashboardAccess => [Admin, Staff, Operator]
}

role_policy! {
    /// Customer records and plans.
    CustomerDesk => [Admin, Staff, Operator]
}

role_policy! {
    /// Technician roster and follow-ups.
    StaffDesk => [Admin, Staff]
}

role_policy! {
    /// Operator invoices.
    Billing => [Admin, Operator]
}

role_policy! {
    /// Reading complaints. Customers and technicians see only their own.
    ComplaintViewers => [Admin, Staff, Operator, Technician, Customer]
}

role_policy! {
    /// Raising complaints.
    ComplaintRaisers => [Admin, Staff, Operator, Customer]
}

role_policy! {
    /// Moving complaints between statuses.
    ComplaintHandlers => [Admin, Staff, Operator, Technician]
}

/// Helper to set the current user in the session.
///
/// Cycles the session id first so a pre-login id cannot be reused.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session.insert(session_keys::CURRENT_USER, user).await
}

/// Helper to clear the current user from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_user(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policies() {
        assert!(AdminOnly::allows(Role::Admin));
        assert!(!AdminOnly::allows(Role::Staff));

        assert!(CustomerDesk::allows(Role::Operator));
        assert!(!CustomerDesk::allows(Role::Technician));

        assert!(Billing::allows(Role::Operator));
        assert!(!Billing::allows(Role::Staff));

        assert!(ComplaintViewers::allows(Role::Customer));
        assert!(ComplaintRaisers::allows(Role::Customer));
        assert!(!ComplaintHandlers::allows(Role::Customer));
        assert!(ComplaintHandlers::allows(Role::Technician));

        assert!(StaffDesk::allows(Role::Staff));
        assert!(!StaffDesk::allows(Role::Operator));
        assert!(!DashboardAccess::allows(Role::Customer));
    }

    #[test]
    fn test_rejection_status_codes() {
        assert_eq!(
            AuthRejection::Unauthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthRejection::Forbidden.into_response().status(),
            StatusCode::FORBIDDEN
        );
    }
}
