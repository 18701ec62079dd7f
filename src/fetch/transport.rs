// src/fetch/transport.rs
// =============================================================================
// The network side of a fetch: one GET, bytes back or a TransportError.
//
// The Transport trait is the seam the Timed Fetcher is generic over, so the
// retry and rate-limit logic can be driven by a scripted transport in tests
// while the real crawler uses reqwest.
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

/// Sent as the User-Agent header on every request
pub const USER_AGENT: &str = "eku-scraper";

// Upper bound on a single attempt, connect + body
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// Any failure of a single attempt. All of these are considered transient
// and are eligible for retry.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, TLS, timeout, protocol or body read failure
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered, but not with a success status
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs one GET of `url` and returns the full response body.
    async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError>;
}

// reqwest-backed transport. No cookies, default redirect policy.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_sends_user_agent_and_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/problems/1"))
            .and(header("user-agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"<p>hi</p>".to_vec()))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new().unwrap();
        let body = transport
            .get(&format!("{}/problems/1", server.uri()))
            .await
            .unwrap();

        assert_eq!(body, b"<p>hi</p>");
    }

    #[tokio::test]
    async fn test_error_status_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let transport = HttpTransport::new().unwrap();
        let err = transport
            .get(&format!("{}/busy", server.uri()))
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_connection_refused_is_request_error() {
        // Nothing listens on port 1
        let transport = HttpTransport::new().unwrap();
        let err = transport.get("http://127.0.0.1:1/").await.unwrap_err();
        assert!(matches!(err, TransportError::Request(_)));
    }
}
