//! History view state: the fetched list plus list/detail mode.
//!
//! DESIGN
//! ======
//! The list is fetched at most once per mount. Opening an entry swaps the mode
//! to `Detail` and leaves `entries` untouched, so "back" returns to the list
//! without another request. Failures are handed back to the caller for
//! logging; the state only clears its loading flags.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::net::error::ApiError;
use crate::net::types::{HistoryEntry, SummaryResult};

/// Which half of the history view is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HistoryMode {
    #[default]
    List,
    Detail {
        response_id: String,
        result: SummaryResult,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryState {
    /// Server-ordered entries from the last successful list fetch.
    pub entries: Vec<HistoryEntry>,
    /// `true` until the list fetch settles (or is abandoned).
    pub loading: bool,
    pub mode: HistoryMode,
    /// Response id of the archived result currently being fetched.
    pub opening: Option<String>,
    list_requested: bool,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            loading: true,
            mode: HistoryMode::List,
            opening: None,
            list_requested: false,
        }
    }
}

impl HistoryState {
    /// Mark the list fetch as issued. Returns `false` if it already was, in
    /// which case the caller must not fetch again.
    pub fn begin_list_fetch(&mut self) -> bool {
        if self.list_requested {
            return false;
        }
        self.list_requested = true;
        self.loading = true;
        true
    }

    /// Store the fetched list, or keep the previous one on failure.
    ///
    /// # Errors
    ///
    /// Returns the fetch error unchanged so the caller can log it.
    pub fn finish_list_fetch(&mut self, outcome: Result<Vec<HistoryEntry>, ApiError>) -> Result<(), ApiError> {
        self.loading = false;
        self.entries = outcome?;
        Ok(())
    }

    /// Stop showing the spinner without fetching (no signed-in user).
    pub fn abandon_list(&mut self) {
        self.loading = false;
    }

    /// Start fetching the archived result for `response_id`. A later call
    /// supersedes an earlier one.
    pub fn begin_open(&mut self, response_id: &str) {
        self.opening = Some(response_id.to_owned());
    }

    /// List → Detail when the fetch for the latest opened entry succeeds.
    /// Responses for superseded entries are dropped.
    ///
    /// # Errors
    ///
    /// Returns the fetch error unchanged so the caller can log it; the mode is
    /// left as it was.
    pub fn finish_open(&mut self, response_id: &str, outcome: Result<SummaryResult, ApiError>) -> Result<(), ApiError> {
        if self.opening.as_deref() != Some(response_id) {
            return Ok(());
        }
        self.opening = None;
        let result = outcome?;
        self.mode = HistoryMode::Detail { response_id: response_id.to_owned(), result };
        Ok(())
    }

    /// Detail → List, keeping the fetched entries.
    pub fn back(&mut self) {
        self.mode = HistoryMode::List;
    }

    #[must_use]
    pub fn detail(&self) -> Option<&SummaryResult> {
        match &self.mode {
            HistoryMode::Detail { result, .. } => Some(result),
            HistoryMode::List => None,
        }
    }

    #[must_use]
    pub fn is_opening(&self, response_id: &str) -> bool {
        self.opening.as_deref() == Some(response_id)
    }
}
