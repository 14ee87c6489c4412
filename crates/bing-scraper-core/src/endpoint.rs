//! URL helper functions for the Bing search endpoint
//!
//! Provides the page URL builder and the paging constants.

/// Default search host
pub const BASE_URL: &str = "https://www.bing.com";

/// Results per page; the `first` parameter advances by this much each page
pub const PAGE_STRIDE: usize = 10;

/// Builds the search URL for a query and result offset
///
/// URL encodes the query and appends the `first` offset parameter.
///
/// # Arguments
/// * `base_url` - Scheme and host of the search endpoint, without trailing slash
/// * `query` - Search query string
/// * `offset` - Value of the `first` parameter
///
/// # Example
/// ```
/// use bing_scraper_core::endpoint::build_search_url;
/// let url = build_search_url("https://www.bing.com", "rust lang", 10);
/// assert_eq!(url, "https://www.bing.com/search?q=rust%20lang&first=10");
/// ```
pub fn build_search_url(base_url: &str, query: &str, offset: usize) -> String {
    let encoded = urlencoding::encode(query);
    format!(
        "{}/search?q={}&first={}",
        base_url.trim_end_matches('/'),
        encoded,
        offset
    )
}

/// Returns the offset for the given 1-based page number
///
/// # Example
/// ```
/// use bing_scraper_core::endpoint::page_offset;
/// assert_eq!(page_offset(1), 10);
/// assert_eq!(page_offset(3), 30);
/// ```
pub fn page_offset(page: usize) -> usize {
    page * PAGE_STRIDE
}
