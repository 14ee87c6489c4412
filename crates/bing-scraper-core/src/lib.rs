//! Bing Scraper Core Library
//!
//! Pages through Bing search results and collects result links.
//!
//! # Overview
//!
//! This crate provides a small scraping pipeline for Bing with:
//! - An HTTP client that asks for the simplified legacy-handset markup
//! - A marker-based link extractor for that markup
//! - Deny-list filtering of result links
//! - A pagination loop with page limits, deadlines and stall detection
//! - Post-processing helpers for deduplication and host reduction
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use bing_scraper_core::{BingScraper, DenyList, host_only, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let scraper = BingScraper::new()?;
//!     let deny: DenyList = ["wikipedia"].into_iter().collect();
//!
//!     let outcome = scraper
//!         .search_with_deadline("rust web scraping", deny, Duration::from_secs(30))
//!         .await;
//!
//!     // Results survive a failure on a later page
//!     for site in host_only(&outcome.results) {
//!         println!("{}", site);
//!     }
//!
//!     outcome.into_result().map(|_| ())
//! }
//! ```
//!
//! # Partial results
//!
//! A search that fails on page five still returns the links from pages
//! one to four. Always look at [`SearchOutcome::results`], whatever
//! [`SearchOutcome::error`] says.

mod cancellation;
mod client;
pub mod endpoint;
mod error;
mod filter;
pub mod parser;
mod postprocess;
mod scraper;
mod types;

// Re-export client types
pub use client::{BingClient, ClientConfig, LEGACY_USER_AGENT, PageSource};

// Re-export cancellation types
pub use cancellation::DeadlineTimer;
pub use tokio_util::sync::CancellationToken;

// Re-export error types
pub use error::{BingError, Result};

// Re-export filtering
pub use filter::{ALWAYS_BLOCKED_HOST, DenyList, reject};

// Re-export parser types
pub use parser::{LinkExtractor, MarkerExtractor};

// Re-export post-processing helpers
pub use postprocess::{host_only, host_only_preserving_scheme, unique};

// Re-export main scraper API
pub use scraper::BingScraper;

// Re-export data types
pub use types::{SearchConfig, SearchOutcome, SearchRequest, StopReason};
