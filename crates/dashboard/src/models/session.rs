//! Session-related types for console authentication.

use isp_console_core::{Email, Role, UserId};
use serde::{Deserialize, Serialize};

use crate::api::LoginResult;

/// Session-stored user identity.
///
/// Holds the backend bearer token so every upstream call is made as this
/// user. The session store is server-side; the cookie only carries the
/// session id.
#[derive(Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub name: String,
    pub email: Option<Email>,
    pub role: Role,
    /// ISP backend bearer token.
    pub token: String,
}

impl CurrentUser {
    /// Whether this user has the given role.
    #[must_use]
    pub fn is(&self, role: Role) -> bool {
        self.role == role
    }
}

impl From<LoginResult> for CurrentUser {
    fn from(login: LoginResult) -> Self {
        Self {
            id: login.user_id,
            name: login.name,
            email: login.email,
            role: login.role,
            token: login.token,
        }
    }
}

impl std::fmt::Debug for CurrentUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrentUser")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}

/// The public view of the session user, without the token.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: Option<Email>,
    pub role: Role,
}

impl From<&CurrentUser> for UserProfile {
    fn from(user: &CurrentUser) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn user() -> CurrentUser {
        CurrentUser {
            id: UserId::new("u-7"),
            name: "Meera".to_string(),
            email: Email::parse("meera@fibernet.in").ok(),
            role: Role::Operator,
            token: "jwt-operator-token".to_string(),
        }
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug_output = format!("{:?}", user());
        assert!(!debug_output.contains("jwt-operator-token"));
    }

    #[test]
    fn test_session_round_trip_keeps_token() {
        let json = serde_json::to_value(user()).unwrap();
        let back: CurrentUser = serde_json::from_value(json).unwrap();
        assert_eq!(back.token, "jwt-operator-token");
        assert!(back.is(Role::Operator));
    }

    #[test]
    fn test_profile_omits_token() {
        let json = serde_json::to_value(UserProfile::from(&user())).unwrap();
        assert!(json.get("token").is_none());
        assert_eq!(json["role"], "operator");
    }
}
