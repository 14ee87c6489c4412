//! Deny-list filtering of candidate hrefs
//!
//! Matching is plain, case-sensitive substring containment on the raw
//! href text. No scheme or host normalization happens here.

use serde::{Deserialize, Serialize};

/// Host that is rejected on every search
pub const ALWAYS_BLOCKED_HOST: &str = "go.microsoft.com";

/// Returns true if `href` contains any non-empty entry of `deny_list`
///
/// # Example
/// ```
/// use bing_scraper_core::reject;
/// assert!(reject("http://go.microsoft.com/x", &["go.microsoft.com"]));
/// assert!(!reject("http://example.com", &[""]));
/// ```
pub fn reject<S: AsRef<str>>(href: &str, deny_list: &[S]) -> bool {
    deny_list
        .iter()
        .map(AsRef::as_ref)
        .any(|entry| !entry.is_empty() && href.contains(entry))
}

/// Substrings whose presence in an href rejects it
///
/// Entry order does not affect filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenyList {
    entries: Vec<String>,
}

impl DenyList {
    /// Create an empty deny list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, skipping exact duplicates
    pub fn push(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        if !self.entries.contains(&entry) {
            self.entries.push(entry);
        }
    }

    /// Returns this list plus [`ALWAYS_BLOCKED_HOST`]
    pub fn with_default_hosts(mut self) -> Self {
        self.push(ALWAYS_BLOCKED_HOST);
        self
    }

    /// Check whether `href` is rejected by this list
    pub fn rejects(&self, href: &str) -> bool {
        reject(href, &self.entries)
    }

    /// Get the entries in insertion order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries, including empty ones
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the list has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for DenyList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = DenyList::new();
        for entry in iter {
            list.push(entry);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reject_matching_host() {
        assert!(reject("http://go.microsoft.com/x", &["go.microsoft.com"]));
    }

    #[test]
    fn test_reject_ignores_empty_entry() {
        assert!(!reject("http://example.com", &[""]));
    }

    #[test]
    fn test_reject_empty_list() {
        let empty: [&str; 0] = [];
        assert!(!reject("http://example.com", &empty));
    }

    #[test]
    fn test_reject_is_case_sensitive() {
        assert!(!reject("http://Wikipedia.org/", &["wikipedia"]));
        assert!(reject("http://en.wikipedia.org/", &["wikipedia"]));
    }

    #[test]
    fn test_reject_matches_anywhere() {
        // Not a host match: the entry sits in the query string
        assert!(reject("://example.com/?ref=wiki", &["wiki"]));
    }

    #[test]
    fn test_deny_list_default_hosts() {
        let list: DenyList = ["wiki"].into_iter().collect();
        let list = list.with_default_hosts();
        assert_eq!(list.entries(), &["wiki".to_string(), ALWAYS_BLOCKED_HOST.to_string()]);
        assert!(list.rejects("://go.microsoft.com/fwlink"));
    }

    #[test]
    fn test_deny_list_default_hosts_not_duplicated() {
        let list: DenyList = [ALWAYS_BLOCKED_HOST].into_iter().collect();
        assert_eq!(list.with_default_hosts().len(), 1);
    }

    #[test]
    fn test_deny_list_empty() {
        let list = DenyList::new();
        assert!(list.is_empty());
        assert!(!list.rejects("://anything"));
    }

    proptest! {
        #[test]
        fn prop_empty_entries_never_reject(href in ".*", n in 0usize..5) {
            let entries = vec![String::new(); n];
            prop_assert!(!reject(&href, &entries));
        }

        #[test]
        fn prop_embedded_entry_always_rejects(
            prefix in "[a-z:/.]{0,12}",
            entry in "[a-z.]{1,12}",
            suffix in "[a-z/?=]{0,12}",
        ) {
            let href = format!("{prefix}{entry}{suffix}");
            prop_assert!(reject(&href, &[entry.as_str()]));
        }

        #[test]
        fn prop_entry_order_irrelevant(href in "[a-z:/.]{0,20}", a in "[a-z]{0,3}", b in "[a-z]{0,3}") {
            prop_assert_eq!(
                reject(&href, &[a.as_str(), b.as_str()]),
                reject(&href, &[b.as_str(), a.as_str()])
            );
        }
    }
}
