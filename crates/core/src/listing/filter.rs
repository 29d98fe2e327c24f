//! Free-text search and facet filtering.

use std::str::FromStr;

/// A record that can be matched by free-text search.
pub trait Searchable {
    /// The text fields a search query is matched against.
    fn search_fields(&self) -> Vec<&str>;
}

/// A normalised free-text query.
///
/// Matching is a case-insensitive substring test over the record's search
/// fields. A blank query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Build a query from user input.
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self(query.trim().to_lowercase())
    }

    /// Build a query from an optional request parameter.
    #[must_use]
    pub fn from_param(query: Option<&str>) -> Self {
        query.map(Self::new).unwrap_or_default()
    }

    /// Whether this query matches every record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The normalised query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Test a record against this query.
    #[must_use]
    pub fn matches<T: Searchable + ?Sized>(&self, record: &T) -> bool {
        self.is_empty()
            || record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&self.0))
    }
}

/// A discrete filter over one field: either everything or one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Facet<T> {
    /// The `"all"` option: no restriction.
    All,
    /// Keep only records whose field equals this value.
    Only(T),
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: FromStr> Facet<T> {
    /// Parse a request parameter. Missing, blank and `"all"` mean no filter.
    ///
    /// # Errors
    ///
    /// Returns the value type's parse error for anything else it rejects.
    pub fn parse(param: Option<&str>) -> Result<Self, T::Err> {
        match param.map(str::trim) {
            None | Some("") => Ok(Self::All),
            Some(value) if value.eq_ignore_ascii_case("all") => Ok(Self::All),
            Some(value) => value.parse().map(Self::Only),
        }
    }
}

impl<T: PartialEq> Facet<T> {
    /// Test a field value against this facet.
    #[must_use]
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

impl Facet<String> {
    /// Test a free-text field, ignoring ASCII case.
    #[must_use]
    pub fn matches_text(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted.eq_ignore_ascii_case(value.trim()),
        }
    }
}

/// A combined search-and-facets predicate for one record type.
pub trait RecordFilter<T> {
    /// Whether the record passes every part of the filter.
    fn matches(&self, record: &T) -> bool;
}

/// Apply a filter, keeping the input order.
#[must_use]
pub fn apply_filter<'a, T, F>(records: &'a [T], filter: &F) -> Vec<&'a T>
where
    F: RecordFilter<T> + ?Sized,
{
    records.iter().filter(|r| filter.matches(r)).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ConnectionStatus;

    struct Row {
        name: &'static str,
        code: &'static str,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.code]
        }
    }

    struct NameStartsWith(char);

    impl RecordFilter<Row> for NameStartsWith {
        fn matches(&self, record: &Row) -> bool {
            record.name.starts_with(self.0)
        }
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let row = Row {
            name: "Priya Sharma",
            code: "CUST-0091",
        };
        assert!(SearchQuery::new("sharma").matches(&row));
        assert!(SearchQuery::new("cust-00").matches(&row));
        assert!(!SearchQuery::new("kumar").matches(&row));
    }

    #[test]
    fn test_blank_search_matches_everything() {
        let row = Row { name: "", code: "" };
        assert!(SearchQuery::new("").matches(&row));
        assert!(SearchQuery::new("   ").matches(&row));
        assert!(SearchQuery::from_param(None).is_empty());
    }

    #[test]
    fn test_facet_parse() {
        assert_eq!(
            Facet::<ConnectionStatus>::parse(None).unwrap(),
            Facet::All
        );
        assert_eq!(
            Facet::<ConnectionStatus>::parse(Some("ALL")).unwrap(),
            Facet::All
        );
        assert_eq!(
            Facet::<ConnectionStatus>::parse(Some("suspended")).unwrap(),
            Facet::Only(ConnectionStatus::Suspended)
        );
        assert!(Facet::<ConnectionStatus>::parse(Some("gone")).is_err());
    }

    #[test]
    fn test_text_facet_ignores_case() {
        let facet = Facet::Only("Fiber 100".to_string());
        assert!(facet.matches_text("fiber 100"));
        assert!(!facet.matches_text("Fiber 200"));
        assert!(Facet::<String>::All.matches_text("anything"));
    }

    #[test]
    fn test_apply_filter_preserves_order() {
        let rows = [
            Row { name: "Anil", code: "1" },
            Row { name: "Bina", code: "2" },
            Row { name: "Arun", code: "3" },
        ];
        let kept = apply_filter(&rows, &NameStartsWith('A'));
        let codes: Vec<_> = kept.iter().map(|r| r.code).collect();
        assert_eq!(codes, ["1", "3"]);
    }

    #[test]
    fn test_apply_filter_empty_input() {
        let rows: [Row; 0] = [];
        assert!(apply_filter(&rows, &NameStartsWith('A')).is_empty());
    }
}
