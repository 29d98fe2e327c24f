//! Fetch state for one list.
//!
//! A failed fetch never clears what is already on screen: the previous
//! records stay and an error message is recorded for a retry prompt.

use std::fmt::Display;

use serde::Serialize;

/// Records plus the outcome of the last fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView<T> {
    /// Records from the last successful fetch.
    pub records: Vec<T>,
    /// Message from the last failed fetch, cleared on success.
    pub error: Option<String>,
    /// Whether any fetch has succeeded yet.
    pub loaded: bool,
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            error: None,
            loaded: false,
        }
    }
}

impl<T> ListView<T> {
    /// Start from an already-fetched list.
    #[must_use]
    pub const fn loaded(records: Vec<T>) -> Self {
        Self {
            records,
            error: None,
            loaded: true,
        }
    }

    /// Fold a fetch result into the view.
    pub fn settle<E: Display>(&mut self, result: Result<Vec<T>, E>) {
        match result {
            Ok(records) => {
                self.records = records;
                self.error = None;
                self.loaded = true;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Builder form of [`ListView::settle`].
    #[must_use]
    pub fn settled<E: Display>(mut self, result: Result<Vec<T>, E>) -> Self {
        self.settle(result);
        self
    }

    /// Whether the last fetch failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}
