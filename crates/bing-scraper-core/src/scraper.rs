//! Pagination controller for Bing searches
//!
//! Drives the page loop: fetch a page, extract and filter its links,
//! append the accepted ones, then decide whether another page is worth
//! fetching.

use std::collections::HashSet;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::cancellation::DeadlineTimer;
use crate::client::{BingClient, ClientConfig, PageSource};
use crate::endpoint::page_offset;
use crate::error::Result;
use crate::filter::DenyList;
use crate::parser::{LinkExtractor, MarkerExtractor};
use crate::types::{SearchConfig, SearchOutcome, SearchRequest, StopReason};

/// Links found on one result page
struct ResultPage<'a> {
    /// Every result href tail, before filtering
    hrefs: Vec<&'a str>,
    /// Href tails that passed the deny list, in page order
    accepted: Vec<&'a str>,
}

impl<'a> ResultPage<'a> {
    fn collect(extractor: &'a dyn LinkExtractor, body: &'a str, deny_list: &DenyList) -> Self {
        let hrefs: Vec<&str> = extractor.extract(body).collect();
        let accepted = hrefs
            .iter()
            .copied()
            .filter(|href| !deny_list.rejects(href))
            .collect();

        Self { hrefs, accepted }
    }

    fn anchors(&self) -> usize {
        self.hrefs.len()
    }

    fn signature(&self) -> PageSignature {
        PageSignature {
            hrefs: self.hrefs.iter().map(|href| href.to_string()).collect(),
            accepted: self.accepted.iter().map(|href| href.to_string()).collect(),
        }
    }
}

/// What a page is compared on when looking for a stall
#[derive(Debug, PartialEq, Eq)]
struct PageSignature {
    hrefs: HashSet<String>,
    accepted: HashSet<String>,
}

impl PageSignature {
    /// Returns true if this page brings nothing new over `previous`
    ///
    /// Pages the deny list empties completely only count as a repeat when
    /// their raw links repeat too; otherwise later pages may still hold
    /// accepted results.
    fn repeats(&self, previous: &PageSignature) -> bool {
        if self.accepted != previous.accepted {
            return false;
        }
        !self.accepted.is_empty() || self.hrefs == previous.hrefs
    }
}

/// Main scraper API for Bing
///
/// Combines a page source (the HTTP client by default) with a link
/// extractor. Pages are fetched strictly one after another, since each
/// page is compared with the one before it.
pub struct BingScraper<S = BingClient> {
    source: S,
    extractor: Box<dyn LinkExtractor + Send + Sync>,
}

impl BingScraper<BingClient> {
    /// Create a new scraper with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        Ok(Self::with_source(BingClient::new()?))
    }

    /// Create a new scraper with custom client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_source(BingClient::with_config(config)?))
    }
}

impl<S: PageSource> BingScraper<S> {
    /// Create a scraper reading pages from `source`
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            extractor: Box::new(MarkerExtractor::default()),
        }
    }

    /// Replace the link extractor
    pub fn with_extractor(mut self, extractor: impl LinkExtractor + Send + Sync + 'static) -> Self {
        self.extractor = Box::new(extractor);
        self
    }

    /// Search with no page cap and no deadline
    ///
    /// Stops when a page comes back without results or repeats the
    /// previous page. `go.microsoft.com` is always added to the deny list.
    ///
    /// # Returns
    /// A [`SearchOutcome`]. Its `results` may be non-empty even when
    /// `error` is set.
    ///
    /// # Errors
    /// Reported in `SearchOutcome::error`:
    /// - `EmptyQuery` if query is empty or whitespace only (no results)
    /// - `RequestConstruction`, `Transport`, `BodyRead` if a page fails
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> bing_scraper_core::Result<()> {
    /// use bing_scraper_core::{BingScraper, DenyList};
    /// let scraper = BingScraper::new()?;
    /// let outcome = scraper.search("rust async", DenyList::new()).await;
    /// for url in &outcome.results {
    ///     println!("{}", url);
    /// }
    /// if let Some(error) = outcome.error {
    ///     eprintln!("stopped early: {}", error);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, query: &str, deny_list: DenyList) -> SearchOutcome {
        self.search_with_config(query, deny_list, SearchConfig::unbounded())
            .await
    }

    /// Search with a time budget
    ///
    /// When the budget runs out, the page in flight is finished and the
    /// search returns what it has, without an error. A zero budget
    /// returns before fetching anything.
    pub async fn search_with_deadline(
        &self,
        query: &str,
        deny_list: DenyList,
        deadline: Duration,
    ) -> SearchOutcome {
        let config = SearchConfig::unbounded().with_deadline(deadline);
        self.search_with_config(query, deny_list, config).await
    }

    /// Search with explicit page limit, deadline and anchor threshold
    pub async fn search_with_config(
        &self,
        query: &str,
        deny_list: DenyList,
        config: SearchConfig,
    ) -> SearchOutcome {
        self.search_with_cancellation(query, deny_list, config, CancellationToken::new())
            .await
    }

    /// Search that also stops when `cancel` is cancelled
    ///
    /// Cancelling `cancel` behaves like an expired deadline. The deadline
    /// timer only cancels a child of `cancel`, never `cancel` itself.
    pub async fn search_with_cancellation(
        &self,
        query: &str,
        deny_list: DenyList,
        config: SearchConfig,
        cancel: CancellationToken,
    ) -> SearchOutcome {
        let request = match SearchRequest::new(query, deny_list, config) {
            Ok(request) => request,
            Err(error) => return SearchOutcome::rejected(error),
        };

        let token = cancel.child_token();
        let _timer = DeadlineTimer::start(token.clone(), request.config().deadline);

        self.run(&request, &token).await
    }

    /// The page loop
    async fn run(&self, request: &SearchRequest, cancel: &CancellationToken) -> SearchOutcome {
        let config = request.config();
        let mut results = Vec::new();
        let mut previous: Option<PageSignature> = None;
        let mut pages = 0;

        let stop = loop {
            if cancel.is_cancelled() {
                break StopReason::Cancelled;
            }
            if config.page_limit.is_some_and(|limit| pages >= limit) {
                break StopReason::PageLimit;
            }

            let offset = page_offset(pages + 1);
            let body = match self.source.fetch_page(request.query(), offset).await {
                Ok(body) => body,
                Err(error) => {
                    warn!(offset, error = %error, results = results.len(), "search page failed");
                    return SearchOutcome {
                        results,
                        error: Some(error),
                        stop: StopReason::Failed,
                        pages_fetched: pages,
                    };
                }
            };
            pages += 1;

            let page = ResultPage::collect(self.extractor.as_ref(), &body, request.deny_list());
            results.extend(page.accepted.iter().map(|href| format!("http{href}")));
            debug!(
                offset,
                anchors = page.anchors(),
                accepted = page.accepted.len(),
                "processed search page"
            );

            if page.anchors() < config.min_anchors {
                break StopReason::SparsePage;
            }

            let signature = page.signature();
            if previous.as_ref().is_some_and(|prev| signature.repeats(prev)) {
                break StopReason::Stalled;
            }
            previous = Some(signature);
        };

        info!(
            query = request.query(),
            pages,
            results = results.len(),
            ?stop,
            "search finished"
        );

        SearchOutcome {
            results,
            error: None,
            stop,
            pages_fetched: pages,
        }
    }
}
