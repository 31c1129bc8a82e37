//! HTTP execution of built requests.
//!
//! The library core only assembles [`Request`] values; this module performs
//! the actual POST exchange and JSON decoding. Failures are surfaced
//! unmodified — no retries, no classification — so callers can pick their
//! own policy (a CLI exits, a service wrapper may retry).

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::request::Request;

/// Errors surfaced by the HTTP exchange.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent or the response body could not be read.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body was not valid JSON for the expected schema.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Thin reqwest wrapper that executes built requests.
pub struct Transport {
    http: reqwest::Client,
}

impl Transport {
    /// Create a transport with a 30-second request timeout.
    pub fn new() -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self { http })
    }

    /// POST `request` exactly as built and decode the JSON reply into `T`.
    pub async fn send<T: DeserializeOwned>(&self, request: &Request) -> Result<T, TransportError> {
        tracing::debug!(url = %request.url, "sending request");

        let mut builder = self.http.post(&request.url).body(request.body.clone());
        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%status, "received response");

        if !status.is_success() {
            return Err(TransportError::Status { status, body });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

// ── Tests ───────────────────────────────────────────────────────────
