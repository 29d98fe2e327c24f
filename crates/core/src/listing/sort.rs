//! Optional column sorting for filtered lists.

use std::cmp::Ordering;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending (A-Z, oldest first, smallest first).
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    /// Parse a direction from a URL parameter string.
    #[must_use]
    pub fn from_str_param(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Asc),
            "desc" | "descending" => Some(Self::Desc),
            _ => None,
        }
    }

    /// Get the URL parameter string for this direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Apply this direction to an ascending ordering.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// A column a list of `T` can be sorted by.
pub trait SortKey<T>: Copy {
    /// Compare two records in ascending order of this column.
    fn compare(self, a: &T, b: &T) -> Ordering;
}

/// Sort a filtered list in place.
///
/// The sort is stable: records that compare equal keep their relative order.
pub fn sort_records<T, K: SortKey<T>>(records: &mut [&T], key: K, direction: SortDirection) {
    records.sort_by(|a, b| direction.apply(key.compare(a, b)));
}

/// Compare optional values, placing missing values last in ascending order.
#[must_use]
pub fn cmp_missing_last<V: Ord>(a: Option<&V>, b: Option<&V>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Compare two strings ignoring case.
#[must_use]
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
