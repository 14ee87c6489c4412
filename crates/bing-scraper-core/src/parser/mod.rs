//! Link extraction from result page markup
//!
//! The pagination loop only sees the [`LinkExtractor`] trait, so the
//! marker-splitting extractor can be swapped out without touching it.

pub mod marker;

pub use marker::{MarkerExtractor, RESULT_ANCHOR_MARKER};

/// Pulls raw href fragments out of a response body
pub trait LinkExtractor {
    /// Yield href fragments in document order
    ///
    /// The iterator is lazy and borrows from `body`.
    fn extract<'a>(&'a self, body: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a>;
}
