// src/fetch/timed.rs
// =============================================================================
// The Timed Fetcher: cache lookup, rate limiting and bounded retry around a
// single GET.
//
// fetch(url, cache_path):
//   1. cache hit  -> return the cached bytes (no wait, no network, no state)
//   2. cache miss -> wait until `delay` has passed since the last successful
//                    fetch, sanitize the URL, then try up to max_retries + 1
//                    times, sleeping `retry_delay` between attempts
//   3. success    -> bump success_count, stamp last_fetch, write the cache
//
// One fetcher is driven by one task, one fetch at a time, so the waits
// below pace every outbound request globally. A failed fetch never moves
// last_fetch: spacing is measured from the last success only.
// =============================================================================

use std::path::Path;
use std::time::Duration;

use tokio::time::{sleep, Instant};

use super::observer::{FetchEvent, FetchObserver, TracingObserver};
use super::transport::{HttpTransport, Transport, TransportError};
use super::{cache, sanitize_url};
use crate::error::{Error, Result};

const DEFAULT_DELAY: Duration = Duration::from_secs(1);
const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(5);
const DEFAULT_RETRIES: u32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct FetchSettings {
    /// Minimum spacing between consecutive network fetches
    pub delay: Duration,
    /// Pause before each retry
    pub retry_delay: Duration,
    /// Retries after the first failed attempt
    pub max_retries: u32,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            retry_delay: DEFAULT_RETRY_DELAY,
            max_retries: DEFAULT_RETRIES,
        }
    }
}

impl FetchSettings {
    /// Builds settings from optional values in seconds; anything left out
    /// takes its default.
    pub fn from_secs(
        delay: Option<f64>,
        retry_delay: Option<f64>,
        max_retries: Option<u32>,
    ) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            delay: match delay {
                Some(secs) => seconds("delay", secs)?,
                None => defaults.delay,
            },
            retry_delay: match retry_delay {
                Some(secs) => seconds("retry delay", secs)?,
                None => defaults.retry_delay,
            },
            max_retries: max_retries.unwrap_or(defaults.max_retries),
        })
    }
}

fn seconds(name: &str, secs: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(secs).map_err(|_| {
        Error::Config(format!(
            "{} must be a non-negative number of seconds, got {}",
            name, secs
        ))
    })
}

// Result of one attempt inside the retry loop
#[derive(Debug)]
enum AttemptOutcome {
    Success(Vec<u8>),
    Retryable(TransportError),
    Terminal(TransportError),
}

pub struct TimedFetcher<T = HttpTransport, O = TracingObserver> {
    settings: FetchSettings,
    transport: T,
    observer: O,
    // When the last successful network fetch completed
    last_fetch: Option<Instant>,
    success_count: u64,
}

impl TimedFetcher {
    /// Fetcher over the real HTTP transport, logging through tracing.
    pub fn new(settings: FetchSettings) -> Result<Self> {
        let transport = HttpTransport::new()?;
        Ok(Self::with_parts(settings, transport, TracingObserver))
    }
}

impl<T: Transport, O: FetchObserver> TimedFetcher<T, O> {
    pub fn with_parts(settings: FetchSettings, transport: T, observer: O) -> Self {
        Self {
            settings,
            transport,
            observer,
            last_fetch: None,
            success_count: 0,
        }
    }

    pub fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    /// Number of successful network fetches. Cache hits don't count.
    pub fn success_count(&self) -> u64 {
        self.success_count
    }

    pub fn last_fetch(&self) -> Option<Instant> {
        self.last_fetch
    }

    /// Returns the bytes at `url`, from `cache_path` if it exists, otherwise
    /// from the network (and then stored at `cache_path`).
    ///
    /// Fails with [`Error::Transport`] once every attempt has failed, or with
    /// [`Error::CacheIo`] if the cache can't be read or written. Cache errors
    /// are not retried.
    pub async fn fetch(&mut self, url: &str, cache_path: &Path) -> Result<Vec<u8>> {
        // A cache hit skips everything else, including the rate limit
        if cache::has(cache_path).await {
            self.observer.on_event(&FetchEvent::CacheHit {
                url,
                path: cache_path,
            });
            return cache::read(cache_path).await;
        }

        // Keep our distance from the previous request
        self.wait_for_slot().await;

        let url = sanitize_url(url);
        let data = self.fetch_with_retry(&url).await?;

        // Cache errors are local problems; they are returned, not retried
        cache::write(cache_path, &data).await?;
        Ok(data)
    }

    // How long to wait at `now` before the next request may go out
    fn pending_delay(&self, now: Instant) -> Option<Duration> {
        let last = self.last_fetch?;
        let elapsed = now.saturating_duration_since(last);
        if elapsed < self.settings.delay {
            Some(self.settings.delay - elapsed)
        } else {
            None
        }
    }

    async fn wait_for_slot(&self) {
        if let Some(delay) = self.pending_delay(Instant::now()) {
            self.observer.on_event(&FetchEvent::Waiting { delay });
            sleep(delay).await;
        }
    }

    async fn fetch_with_retry(
        &mut self,
        url: &str,
    ) -> std::result::Result<Vec<u8>, TransportError> {
        // attempt 0 is the first try, 1..=max_retries are retries
        let mut attempt = 0;
        loop {
            self.observer.on_event(&FetchEvent::Attempt { url, attempt });

            match self.attempt(url, attempt).await {
                AttemptOutcome::Success(data) => {
                    // Only a success counts and moves the rate-limit clock
                    self.success_count += 1;
                    self.last_fetch = Some(Instant::now());
                    self.observer.on_event(&FetchEvent::Fetched {
                        url,
                        attempt,
                        bytes: data.len(),
                    });
                    return Ok(data);
                }
                AttemptOutcome::Retryable(error) => {
                    // Full pause every time, whatever the last_fetch bookkeeping says
                    let delay = self.settings.retry_delay;
                    self.observer.on_event(&FetchEvent::RetryScheduled {
                        url,
                        attempt,
                        error: &error,
                        delay,
                    });
                    sleep(delay).await;
                    attempt += 1;
                }
                AttemptOutcome::Terminal(error) => {
                    // Out of retries: hand the error back untouched, cache stays empty
                    self.observer.on_event(&FetchEvent::GaveUp {
                        url,
                        attempts: attempt + 1,
                        error: &error,
                    });
                    return Err(error);
                }
            }
        }
    }

    async fn attempt(&self, url: &str, attempt: u32) -> AttemptOutcome {
        match self.transport.get(url).await {
            Ok(data) => AttemptOutcome::Success(data),
            Err(error) if attempt < self.settings.max_retries => AttemptOutcome::Retryable(error),
            Err(error) => AttemptOutcome::Terminal(error),
        }
    }
}
