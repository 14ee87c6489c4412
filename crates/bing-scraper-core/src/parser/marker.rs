//! Marker-based result link extractor
//!
//! Bing's simplified (legacy handset) markup renders every organic result
//! as `<a _ctf="rdr_T" href="http...">`. Splitting on that literal prefix
//! and cutting at the next quote yields the href tail without the scheme
//! prefix `http`, which callers have to put back.
//!
//! This is a contract on the server's current markup, not a parser. If
//! the markup changes, extraction silently yields nothing.

use super::LinkExtractor;

/// Literal text preceding each result href in the simplified markup
pub const RESULT_ANCHOR_MARKER: &str = r#"<a _ctf="rdr_T" href="http"#;

/// Extracts href tails following a literal marker
#[derive(Debug, Clone)]
pub struct MarkerExtractor {
    marker: String,
}

impl MarkerExtractor {
    /// Create an extractor splitting on a custom marker
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// Get the marker this extractor splits on
    pub fn marker(&self) -> &str {
        &self.marker
    }
}

impl Default for MarkerExtractor {
    fn default() -> Self {
        Self::new(RESULT_ANCHOR_MARKER)
    }
}

impl LinkExtractor for MarkerExtractor {
    fn extract<'a>(&'a self, body: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        if self.marker.is_empty() {
            return Box::new(std::iter::empty());
        }

        // The chunk before the first marker is page preamble
        Box::new(
            body.split(self.marker.as_str())
                .skip(1)
                .map(|chunk| chunk.split('"').next().unwrap_or(chunk)),
        )
    }
}
