//! The list pipeline applied to every fetched collection.
//!
//! ```text
//! fetched records ──► filter (search AND facets) ──► sort ──► render / export
//!        │
//!        └──────────► aggregate (summary cards)
//! ```
//!
//! Filtering borrows: the output is an order-preserving `Vec<&T>` over the
//! input slice, so the full list stays available for aggregates.

pub mod filter;
pub mod sort;
pub mod stats;

pub use filter::{Facet, RecordFilter, SearchQuery, Searchable, apply_filter};
pub use sort::{SortDirection, SortKey, sort_records};
pub use stats::{percentage, percentage_of_count};
