//! Business logic that spans several backend calls.

pub mod overview;

pub use overview::{DashboardOverview, SectionWarning, build_overview};
