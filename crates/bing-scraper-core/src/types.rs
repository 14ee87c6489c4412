//! Core data types for the Bing scraper
//!
//! Contains the search request, its configuration and the outcome
//! handed back to callers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{BingError, Result};
use crate::filter::DenyList;

/// Options controlling when the pagination loop stops
///
/// Page limit and deadline are independent; either, both or neither may
/// be set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of pages to fetch, `None` for no cap
    pub page_limit: Option<usize>,

    /// Time budget for the whole call, `None` for no budget
    pub deadline: Option<Duration>,

    /// A page with fewer result anchors than this ends the search (default: 1)
    pub min_anchors: usize,
}

impl SearchConfig {
    /// No page cap, no deadline
    pub fn unbounded() -> Self {
        Self {
            page_limit: None,
            deadline: None,
            min_anchors: 1,
        }
    }

    /// Hard cap of `pages` pages, no deadline
    pub fn bounded(pages: usize) -> Self {
        Self {
            page_limit: Some(pages),
            ..Self::unbounded()
        }
    }

    /// Set the time budget
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Set the minimum anchor count below which a page ends the search
    pub fn with_min_anchors(mut self, min_anchors: usize) -> Self {
        self.min_anchors = min_anchors;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// A validated search call
///
/// Holds the trimmed query and the deny list with the always-blocked
/// hosts already added. Immutable once built.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    query: String,
    deny_list: DenyList,
    config: SearchConfig,
}

impl SearchRequest {
    /// Validate the query and build the request
    ///
    /// Surrounding whitespace is stripped, and the stripped query is the
    /// one sent to the server: `"  rust  "` is searched as `"rust"`.
    ///
    /// # Errors
    /// - `EmptyQuery` if query is empty or whitespace only
    pub fn new(query: &str, deny_list: DenyList, config: SearchConfig) -> Result<Self> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(BingError::EmptyQuery);
        }

        Ok(Self {
            query: trimmed.to_string(),
            deny_list: deny_list.with_default_hosts(),
            config,
        })
    }

    /// Trimmed query sent as the `q` parameter
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Caller's deny list plus the always-blocked hosts
    pub fn deny_list(&self) -> &DenyList {
        &self.deny_list
    }

    /// Page limit, deadline and anchor threshold for this call
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Why the pagination loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// A page repeated the previous page's links
    Stalled,
    /// A page had fewer result anchors than the configured minimum
    SparsePage,
    /// The configured page limit was reached
    PageLimit,
    /// The deadline expired or the caller cancelled
    Cancelled,
    /// An error ended the search
    Failed,
}

/// Result of a search call
///
/// `results` must be inspected even when `error` is set: a failure on a
/// later page keeps everything gathered before it.
#[derive(Debug, Serialize)]
pub struct SearchOutcome {
    /// Accepted absolute URLs in the order they were found
    pub results: Vec<String>,

    /// Error that ended the search, if any
    pub error: Option<BingError>,

    /// Why the search stopped
    pub stop: StopReason,

    /// Number of pages fetched successfully
    pub pages_fetched: usize,
}

impl SearchOutcome {
    pub(crate) fn rejected(error: BingError) -> Self {
        Self {
            results: Vec::new(),
            error: Some(error),
            stop: StopReason::Failed,
            pages_fetched: 0,
        }
    }

    /// Returns true if the search ended without an error
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Convert into a `Result`, discarding partial results on error
    pub fn into_result(self) -> Result<Vec<String>> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.results),
        }
    }
}
