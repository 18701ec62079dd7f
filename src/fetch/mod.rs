// src/fetch/mod.rs
// =============================================================================
// Polite, cached page fetching.
//
// Submodules:
// - sanitize:  percent-encodes URLs before they are requested
// - cache:     the on-disk response cache (file exists = hit)
// - transport: one HTTP GET (reqwest), behind the Transport trait
// - observer:  events the fetcher reports, and the tracing-backed default
// - timed:     TimedFetcher, tying the above together with rate limiting
//              and bounded retry
// =============================================================================

pub mod cache;
mod observer;
mod sanitize;
mod timed;
mod transport;

pub use observer::{FetchEvent, FetchObserver, TracingObserver, LOG_TARGET};
pub use sanitize::sanitize_url;
pub use timed::{FetchSettings, TimedFetcher};
pub use transport::{HttpTransport, Transport, TransportError, USER_AGENT};
