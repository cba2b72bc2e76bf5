//! Poller - Fetches stats payloads on a fixed interval
//!
//! ## Error Counting
//!
//! ```text
//! fetch ok       → counter = 0, payload queued
//! fetch failed   → counter += 1, nothing queued
//! counter >= max → queue closed, task exits (checked after every sleep)
//! ```
//!
//! A slow driver applies backpressure: once the queue is full, the poller
//! waits on `send` and does not fetch again until there is room.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::{sleep, timeout};
use tracing::{debug, error, instrument, trace, warn};

use crate::{RawPayload, config::PollerConfig, error::FetchError, transport::Fetch};

/// Factory for polling tasks against one stats endpoint
///
/// Every call to [`Poller::poll`] starts an independent task with a fresh
/// error counter and its own queue.
pub struct Poller<F> {
    config: PollerConfig,
    fetcher: Arc<F>,
}

impl<F> Poller<F>
where
    F: Fetch,
{
    pub fn new(config: PollerConfig, fetcher: F) -> Self {
        Self {
            config,
            fetcher: Arc::new(fetcher),
        }
    }

    /// Start polling and return the receiving half of the payload queue
    ///
    /// The queue is closed once the error threshold is reached.
    pub fn poll(&self) -> mpsc::Receiver<RawPayload> {
        let (payload_tx, payload_rx) = mpsc::channel(self.config.queue_capacity.max(1));

        let task = PollTask {
            config: self.config.clone(),
            fetcher: Arc::clone(&self.fetcher),
            payload_tx,
            consecutive_errors: 0,
        };

        tokio::spawn(task.run());

        payload_rx
    }

    pub fn config(&self) -> &PollerConfig {
        &self.config
    }
}

/// State owned by one running polling loop
struct PollTask<F> {
    config: PollerConfig,
    fetcher: Arc<F>,
    payload_tx: mpsc::Sender<RawPayload>,

    /// Failed cycles since the last successful one
    consecutive_errors: usize,
}

impl<F> PollTask<F>
where
    F: Fetch,
{
    #[instrument(skip(self), fields(url = %self.config.url))]
    async fn run(mut self) {
        debug!(
            "starting poller with interval {:?} and error threshold {}",
            self.config.interval(),
            self.config.error_threshold
        );

        loop {
            sleep(self.config.interval()).await;

            if self.consecutive_errors >= self.config.error_threshold {
                error!(
                    "unable to fetch statistics: {} consecutive errors, stopping poller",
                    self.consecutive_errors
                );
                break;
            }

            match self.fetch_once().await {
                Ok(payload) => {
                    self.consecutive_errors = 0;
                    trace!("queueing payload of {} bytes", payload.len());

                    if self.payload_tx.send(payload).await.is_err() {
                        warn!("payload receiver dropped, stopping poller");
                        break;
                    }
                }
                Err(e) => {
                    self.consecutive_errors += 1;
                    warn!(
                        "poll failed ({}/{}): {e}",
                        self.consecutive_errors, self.config.error_threshold
                    );
                }
            }
        }

        // dropping `payload_tx` closes the queue
        debug!("poller stopped");
    }

    async fn fetch_once(&self) -> Result<RawPayload, FetchError> {
        let limit = self.config.timeout();

        match timeout(limit, self.fetcher.fetch(&self.config.url)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(limit)),
        }
    }
}
