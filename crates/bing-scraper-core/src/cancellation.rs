//! Deadline timer for search calls
//!
//! A search with a time budget gets one background task that sleeps for
//! the budget and then cancels the call's token. The pagination loop polls
//! the token between pages, so a request already in flight always
//! completes.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Background task that cancels a token once a deadline passes
///
/// The task is aborted when the timer is dropped, so it never outlives
/// the search call that started it.
#[derive(Debug)]
pub struct DeadlineTimer {
    handle: Option<JoinHandle<()>>,
}

impl DeadlineTimer {
    /// Start the timer for `deadline`
    ///
    /// - `None` starts nothing.
    /// - A zero deadline cancels `token` right away: the budget is spent
    ///   before the first page.
    /// - A positive deadline spawns the timer task. Must be called from
    ///   within a tokio runtime.
    pub fn start(token: CancellationToken, deadline: Option<Duration>) -> Self {
        let handle = match deadline {
            None => None,
            Some(budget) if budget.is_zero() => {
                token.cancel();
                None
            }
            Some(budget) => Some(tokio::spawn(async move {
                tokio::select! {
                    _ = tokio::time::sleep(budget) => {
                        debug!(?budget, "search deadline expired");
                        token.cancel();
                    }
                    // Cancelled by the caller first; nothing left to signal
                    _ = token.cancelled() => {}
                }
            })),
        };

        Self { handle }
    }

    /// Returns true if a timer task was spawned and is still running
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for DeadlineTimer {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
