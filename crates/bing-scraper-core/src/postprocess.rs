//! Post-processing of accumulated search results
//!
//! These run after a search has returned; the pagination loop itself
//! never deduplicates.

use std::collections::HashSet;

use url::Url;

/// Removes exact duplicates, keeping the first occurrence of each entry
///
/// # Example
/// ```
/// use bing_scraper_core::unique;
/// let list = vec!["b".to_string(), "a".to_string(), "b".to_string()];
/// assert_eq!(unique(&list), vec!["b", "a"]);
/// ```
pub fn unique<S: AsRef<str>>(list: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    list.iter()
        .map(AsRef::as_ref)
        .filter(|entry| seen.insert(*entry))
        .map(str::to_string)
        .collect()
}

/// Reduces each URL to `http://<host>` and deduplicates
///
/// The scheme is always rewritten to `http`, so `https://a.example/x`
/// becomes `http://a.example`. Entries that do not parse or have no host
/// are dropped.
///
/// # Example
/// ```
/// use bing_scraper_core::host_only;
/// let list = ["https://a.example/x", "http://a.example/y", "nonsense"];
/// assert_eq!(host_only(&list), vec!["http://a.example"]);
/// ```
pub fn host_only<S: AsRef<str>>(list: &[S]) -> Vec<String> {
    let hosts: Vec<String> = list
        .iter()
        .filter_map(|uri| parse_host(uri.as_ref()))
        .map(|(_, host)| format!("http://{host}"))
        .collect();
    unique(&hosts)
}

/// Reduces each URL to `<scheme>://<host>` and deduplicates
///
/// Like [`host_only`], but `https` results stay `https`.
pub fn host_only_preserving_scheme<S: AsRef<str>>(list: &[S]) -> Vec<String> {
    let hosts: Vec<String> = list
        .iter()
        .filter_map(|uri| parse_host(uri.as_ref()))
        .map(|(scheme, host)| format!("{scheme}://{host}"))
        .collect();
    unique(&hosts)
}

/// Splits an absolute URL into scheme and host (with port, if any)
fn parse_host(uri: &str) -> Option<(String, String)> {
    let parsed = Url::parse(uri).ok()?;
    let host = parsed.host_str()?;
    if host.is_empty() {
        return None;
    }
    let host = match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };
    Some((parsed.scheme().to_string(), host))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_unique_empty() {
        let empty: [&str; 0] = [];
        assert!(unique(&empty).is_empty());
    }

    #[test]
    fn test_unique_all_unique() {
        assert_eq!(unique(&["a", "b", "c"]), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unique_all_duplicates() {
        assert_eq!(unique(&["x", "x", "x"]), vec!["x"]);
    }

    #[test]
    fn test_unique_keeps_first_occurrence() {
        assert_eq!(unique(&["b", "a", "b", "c", "a"]), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_host_only_strips_path_and_query() {
        let list = ["http://www.rust-lang.org/learn?x=1#top"];
        assert_eq!(host_only(&list), vec!["http://www.rust-lang.org"]);
    }

    #[test]
    fn test_host_only_forces_http() {
        let list = ["https://docs.rs/tokio"];
        assert_eq!(host_only(&list), vec!["http://docs.rs"]);
    }

    #[test]
    fn test_host_only_drops_malformed() {
        let list = ["not a url", "://missing-scheme.example", "mailto:me@example.com", "http://ok.example/"];
        assert_eq!(host_only(&list), vec!["http://ok.example"]);
    }

    #[test]
    fn test_host_only_keeps_port() {
        let list = ["http://127.0.0.1:8080/search"];
        assert_eq!(host_only(&list), vec!["http://127.0.0.1:8080"]);
    }

    #[test]
    fn test_host_only_preserving_scheme() {
        let list = ["https://docs.rs/tokio", "http://docs.rs/serde", "https://docs.rs/url"];
        assert_eq!(
            host_only_preserving_scheme(&list),
            vec!["https://docs.rs", "http://docs.rs"]
        );
    }

    proptest! {
        #[test]
        fn prop_unique_has_no_duplicates(list in proptest::collection::vec("[a-c]{0,2}", 0..20)) {
            let result = unique(&list);
            let distinct: HashSet<&String> = result.iter().collect();
            prop_assert_eq!(distinct.len(), result.len());
        }

        #[test]
        fn prop_unique_preserves_first_occurrence_order(list in proptest::collection::vec("[a-c]{0,2}", 0..20)) {
            let result = unique(&list);
            let positions: Vec<usize> = result
                .iter()
                .map(|entry| list.iter().position(|e| e == entry).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn prop_host_only_of_repeated_entry(uri in ".{0,40}") {
            let list = [uri.clone(), uri];
            prop_assert!(host_only(&list).len() <= 1);
        }
    }
}
