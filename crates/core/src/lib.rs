//! ISP Console Core - shared types and the list pipeline.
//!
//! This crate provides the types used across the console's components:
//! - `dashboard` - the HTTP service that fronts the ISP backend
//! - `cli` - scripted exports and summaries
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. Everything here operates on records that have already been
//! fetched.
//!
//! # Modules
//!
//! - [`types`] - IDs, emails, money, statuses and roles
//! - [`entities`] - customers, operators, technicians, vendors, invoices,
//!   complaints, plans and follow-ups, with their filters, sort keys and stats
//! - [`listing`] - search, facet filtering, sorting and summary arithmetic
//! - [`export`] - CSV export
//! - [`workflow`] - complaint and follow-up status overwrites
//! - [`view`] - fetch state for a list
//! - [`analytics`] - report shapes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod analytics;
pub mod entities;
pub mod export;
pub mod listing;
pub mod types;
pub mod view;
pub mod workflow;

pub use entities::*;
pub use types::*;
