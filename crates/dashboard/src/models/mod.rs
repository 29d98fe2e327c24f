//! Session-held types for the dashboard.

pub mod session;

pub use session::{CurrentUser, UserProfile, keys as session_keys};
