//! Error types for the Bing scraper
//!
//! Provides the error enum shared by the request issuer and the
//! pagination controller, with serialization as a plain message.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all Bing scraper operations
///
/// Only [`BingError::EmptyQuery`] is raised before any page is fetched.
/// The request errors end the pagination loop but never discard the
/// results gathered on earlier pages.
#[derive(Error, Debug)]
pub enum BingError {
    /// Query was empty or whitespace only
    #[error("bing: empty string given")]
    EmptyQuery,

    /// The page request could not be built (malformed URL, bad header)
    #[error("Failed to build request: {0}")]
    RequestConstruction(#[source] reqwest::Error),

    /// The request was sent but failed in transit (connect, timeout)
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response arrived but its body could not be read
    #[error("Failed to read response body: {0}")]
    BodyRead(#[source] reqwest::Error),

    /// The HTTP client could not be created from the given configuration
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl Serialize for BingError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for Bing scraper operations
pub type Result<T> = std::result::Result<T, BingError>;
