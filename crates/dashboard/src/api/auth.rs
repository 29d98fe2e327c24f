//! Login against the ISP backend.

use isp_console_core::{Email, Role, UserId};
use serde::Serialize;
use tracing::instrument;

use super::conversions::convert_login;
use super::types::RawLoginResponse;
use super::{IspApiClient, IspApiError};

/// A successful login: the bearer token and who it belongs to.
#[derive(Clone)]
pub struct LoginResult {
    pub token: String,
    pub user_id: UserId,
    pub name: String,
    pub email: Option<Email>,
    pub role: Role,
}

impl std::fmt::Debug for LoginResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginResult")
            .field("token", &"[REDACTED]")
            .field("user_id", &self.user_id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("role", &self.role)
            .finish()
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl IspApiClient {
    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns `IspApiError::Unauthorized` for bad credentials, or another
    /// error if the request or response parsing fails.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, IspApiError> {
        let raw: RawLoginResponse = self
            .post("/auth/login", &LoginRequest { email, password }, None)
            .await?;
        convert_login(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_result_debug_redacts_token() {
        let login = LoginResult {
            token: "jwt-secret-value".to_string(),
            user_id: UserId::new("u1"),
            name: "Asha".to_string(),
            email: None,
            role: Role::Staff,
        };
        let debug_output = format!("{login:?}");
        assert!(!debug_output.contains("jwt-secret-value"));
        assert!(debug_output.contains("[REDACTED]"));
    }
}
