// src/fetch/observer.rs
// =============================================================================
// What the Timed Fetcher reports while it works.
//
// The fetcher never logs directly. It is handed a FetchObserver and emits a
// FetchEvent at each step; the default observer turns those into tracing
// events under the `fetch` target, and tests plug in an observer that just
// records them.
// =============================================================================

use std::path::Path;
use std::time::Duration;

use super::TransportError;

/// tracing target for everything the fetcher logs
pub const LOG_TARGET: &str = "fetch";

#[derive(Debug)]
pub enum FetchEvent<'a> {
    /// Served from the disk cache, no network involved
    CacheHit { url: &'a str, path: &'a Path },
    /// Sleeping to keep the minimum spacing between requests
    Waiting { delay: Duration },
    /// About to issue attempt number `attempt` (0 = first try)
    Attempt { url: &'a str, attempt: u32 },
    Fetched {
        url: &'a str,
        attempt: u32,
        bytes: usize,
    },
    /// Attempt failed and another one will follow after `delay`
    RetryScheduled {
        url: &'a str,
        attempt: u32,
        error: &'a TransportError,
        delay: Duration,
    },
    /// Last allowed attempt failed
    GaveUp {
        url: &'a str,
        attempts: u32,
        error: &'a TransportError,
    },
}

pub trait FetchObserver: Send + Sync {
    fn on_event(&self, event: &FetchEvent<'_>);
}

// Forwards every event to tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl FetchObserver for TracingObserver {
    fn on_event(&self, event: &FetchEvent<'_>) {
        match event {
            FetchEvent::CacheHit { url, path } => {
                tracing::info!(
                    target: LOG_TARGET,
                    "Fetching url {} cached at {}",
                    url,
                    path.display()
                );
            }
            FetchEvent::Waiting { delay } => {
                tracing::debug!(
                    target: LOG_TARGET,
                    "Sleeping for {:.6} seconds",
                    delay.as_secs_f64()
                );
            }
            FetchEvent::Attempt { url, attempt: 0 } => {
                tracing::info!(target: LOG_TARGET, "Fetching: {}", url);
            }
            FetchEvent::Attempt { url, attempt } => {
                tracing::info!(target: LOG_TARGET, "Fetching (retry {}): {}", attempt, url);
            }
            FetchEvent::Fetched { url, attempt, bytes } => {
                tracing::debug!(
                    target: LOG_TARGET,
                    attempt,
                    "Fetched {} bytes from {}",
                    bytes,
                    url
                );
            }
            FetchEvent::RetryScheduled {
                url,
                attempt,
                error,
                delay,
            } => {
                tracing::error!(
                    target: LOG_TARGET,
                    attempt,
                    error = %error,
                    "Fetch of {} failed; retrying in {} seconds",
                    url,
                    delay.as_secs_f64()
                );
            }
            FetchEvent::GaveUp {
                url,
                attempts,
                error,
            } => {
                tracing::warn!(
                    target: LOG_TARGET,
                    error = %error,
                    "Giving up on {} after {} attempt(s)",
                    url,
                    attempts
                );
            }
        }
    }
}
