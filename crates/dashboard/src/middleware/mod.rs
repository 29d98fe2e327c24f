//! HTTP middleware for the dashboard.
//!
//! - [`session`] - in-memory `tower-sessions` layer
//! - [`auth`] - extractors that require a logged-in user and, per route,
//!   one of a set of roles

pub mod auth;
pub mod session;

pub use auth::{
    AuthRejection, RequireAuth, RequireRole, RolePolicy, clear_current_user, set_current_user,
};
pub use session::create_session_layer;
