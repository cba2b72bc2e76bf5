//! Access to the remote stats endpoint
//!
//! The poller only depends on the [`Fetch`] capability, so tests can swap the
//! HTTP client for a scripted source.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use tracing::trace;

use crate::{RawPayload, error::FetchError};

#[async_trait]
pub trait Fetch: Send + Sync + 'static {
    /// Issue one request and return the response body
    async fn fetch(&self, url: &str) -> Result<RawPayload, FetchError>;
}

/// [`Fetch`] implementation over a plain HTTP GET
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Build a fetcher whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { client, timeout })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<RawPayload, FetchError> {
        trace!("sending request to {url}");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.timeout)
            } else {
                FetchError::Transport(e.to_string())
            }
        })?;

        // Body of a failed response is dropped unread
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))?;

        trace!("received {} bytes from {url}", body.len());

        Ok(body.to_vec())
    }
}
