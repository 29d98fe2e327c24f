//! Shared pieces of the list endpoints: query parameters, the
//! filter-sort pipeline, the JSON envelope and CSV downloads.

use std::fmt::Display;
use std::str::FromStr;

use axum::http::header;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use isp_console_core::export::{CsvRecord, export_filename, to_csv};
use isp_console_core::listing::{
    Facet, RecordFilter, SearchQuery, SortDirection, SortKey, apply_filter, sort_records,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Query parameters accepted by every list endpoint.
///
/// Each endpoint reads the facets it knows and ignores the rest.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub plan: Option<String>,
    pub state: Option<String>,
    pub department: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub priority: Option<String>,
    pub min_priority: Option<String>,
    pub max_priority: Option<String>,
    pub technician: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
}

impl ListParams {
    pub fn search(&self) -> SearchQuery {
        SearchQuery::from_param(self.search.as_deref())
    }

    /// Sort key, if one was asked for.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` for a column that cannot be sorted.
    pub fn sort_key<K>(&self, parse: impl Fn(&str) -> Option<K>) -> Result<Option<K>, AppError> {
        match self.sort.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => parse(value)
                .map(Some)
                .ok_or_else(|| AppError::BadRequest(format!("cannot sort by {value:?}"))),
        }
    }

    /// Sort direction, ascending unless `dir=desc`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` for anything other than `asc`/`desc`.
    pub fn direction(&self) -> Result<SortDirection, AppError> {
        match self.dir.as_deref().map(str::trim) {
            None | Some("") => Ok(SortDirection::default()),
            Some(value) => SortDirection::from_str_param(value)
                .ok_or_else(|| AppError::BadRequest(format!("invalid sort direction {value:?}"))),
        }
    }
}

/// Parse a facet parameter.
///
/// # Errors
///
/// Returns `AppError::BadRequest` when the value is not in the facet's domain.
pub fn facet<T>(param: Option<&str>) -> Result<Facet<T>, AppError>
where
    T: FromStr,
    T::Err: Display,
{
    Facet::<T>::parse(param).map_err(|e: T::Err| AppError::BadRequest(e.to_string()))
}

/// Parse an optional bound such as `min_priority`; `all` means unbounded.
///
/// # Errors
///
/// Returns `AppError::BadRequest` when the value does not parse.
pub fn bound<T>(param: Option<&str>) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: Display,
{
    Ok(match facet(param)? {
        Facet::All => None,
        Facet::Only(value) => Some(value),
    })
}

/// Filter then (optionally) sort. Filtering preserves input order.
pub fn filter_and_sort<'a, T, F, K>(
    records: &'a [T],
    filter: &F,
    sort: Option<K>,
    direction: SortDirection,
) -> Vec<&'a T>
where
    F: RecordFilter<T>,
    K: SortKey<T>,
{
    let mut kept = apply_filter(records, filter);
    if let Some(key) = sort {
        sort_records(&mut kept, key, direction);
    }
    kept
}

/// A list endpoint's response.
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T, S> {
    /// Records that passed the filter, in display order.
    pub items: Vec<T>,
    /// Size of the full fetched list.
    pub total: usize,
    /// Number of records after filtering.
    pub filtered: usize,
    /// Summary statistics over the full fetched list.
    pub stats: S,
}

impl<T: Clone, S> ListResponse<T, S> {
    pub fn new(all: &[T], kept: &[&T], stats: S) -> Self {
        Self {
            items: kept.iter().map(|&r| r.clone()).collect(),
            total: all.len(),
            filtered: kept.len(),
            stats,
        }
    }
}

/// Serve filtered records as a CSV download named `<entity>-<date>.csv`.
pub fn csv_download<T: CsvRecord>(entity: &str, records: &[&T]) -> Response {
    let filename = export_filename(entity, Utc::now().date_naive());
    let body = to_csv(records.iter().copied());
    tracing::info!(entity, rows = records.len(), "CSV export");
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response()
}

/// Body of the status-change endpoints.
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

impl StatusUpdate {
    /// Parse the requested status.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` if the status is unknown.
    pub fn parse<T>(&self) -> Result<T, AppError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.status
            .parse()
            .map_err(|e: T::Err| AppError::BadRequest(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use isp_console_core::{ConnectionStatus, CustomerSortKey, Priority};

    use super::*;

    #[test]
    fn test_facet_parsing() {
        assert!(matches!(
            facet::<ConnectionStatus>(Some("all")).unwrap(),
            Facet::All
        ));
        assert!(matches!(
            facet::<ConnectionStatus>(Some("Active")).unwrap(),
            Facet::Only(ConnectionStatus::Active)
        ));
        assert!(matches!(
            facet::<ConnectionStatus>(Some("frozen")),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_bound_parsing() {
        assert_eq!(bound::<Priority>(None).unwrap(), None);
        assert_eq!(bound::<Priority>(Some("high")).unwrap(), Some(Priority::High));
    }

    #[test]
    fn test_sort_and_direction() {
        let params = ListParams {
            sort: Some("charges".to_string()),
            dir: Some("desc".to_string()),
            ..ListParams::default()
        };
        assert_eq!(
            params.sort_key(CustomerSortKey::from_str_param).unwrap(),
            Some(CustomerSortKey::MonthlyCharges)
        );
        assert_eq!(params.direction().unwrap(), SortDirection::Desc);

        let bad = ListParams {
            sort: Some("shoe_size".to_string()),
            dir: Some("sideways".to_string()),
            ..ListParams::default()
        };
        assert!(bad.sort_key(CustomerSortKey::from_str_param).is_err());
        assert!(bad.direction().is_err());
    }

    #[test]
    fn test_status_update_parse() {
        let update = StatusUpdate {
            status: "In Progress".to_string(),
        };
        let status: isp_console_core::ComplaintStatus = update.parse().unwrap();
        assert_eq!(status, isp_console_core::ComplaintStatus::InProgress);
    }
}
