//! Core value types for the ISP console.
//!
//! Type-safe wrappers for identifiers, contact emails, money and the
//! status/role vocabularies shared by every entity.

pub mod email;
pub mod id;
pub mod money;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use money::{CurrencyCode, Money};
pub use status::*;
