use std::time::Duration;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use tracing::trace;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub poller: PollerConfig,

    #[serde(default)]
    pub thresholds: Thresholds,
}

/// Parameters of the polling loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollerConfig {
    /// Stats endpoint
    #[serde(default = "default_url")]
    pub url: String,

    /// Upper bound for a single request
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Pause before every poll cycle
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Consecutive failed cycles after which polling stops
    #[serde(default = "default_error_threshold")]
    pub error_threshold: usize,

    /// Payloads buffered before the poller has to wait for the driver
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_ms: default_timeout_ms(),
            interval_ms: default_interval_ms(),
            error_threshold: default_error_threshold(),
            queue_capacity: default_queue_capacity(),
        }
    }
}

impl PollerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Alert thresholds. `load` is an absolute value, the others are percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(default = "default_load")]
    pub load: u64,

    #[serde(default = "default_memory")]
    pub memory: u64,

    #[serde(default = "default_disk")]
    pub disk: u64,

    #[serde(default = "default_network")]
    pub network: u64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            load: default_load(),
            memory: default_memory(),
            disk: default_disk(),
            network: default_network(),
        }
    }
}

fn default_url() -> String {
    String::from("http://localhost:8080/_stats")
}

fn default_timeout_ms() -> u64 {
    3000
}

fn default_interval_ms() -> u64 {
    2000
}

fn default_error_threshold() -> usize {
    3
}

fn default_queue_capacity() -> usize {
    3
}

fn default_load() -> u64 {
    30
}

fn default_memory() -> u64 {
    80
}

fn default_disk() -> u64 {
    90
}

fn default_network() -> u64 {
    90
}

impl Config {
    /// Reject values the poller cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        let PollerConfig {
            url,
            timeout_ms,
            interval_ms,
            error_threshold,
            queue_capacity,
        } = &self.poller;

        if url.is_empty() {
            bail!("poller.url must not be empty");
        }
        if *timeout_ms == 0 {
            bail!("poller.timeout_ms must be greater than 0");
        }
        if *interval_ms == 0 {
            bail!("poller.interval_ms must be greater than 0");
        }
        if *error_threshold == 0 {
            bail!("poller.error_threshold must be greater than 0");
        }
        if *queue_capacity == 0 {
            bail!("poller.queue_capacity must be greater than 0");
        }

        Ok(())
    }
}

pub fn read_config_file(path: &str) -> anyhow::Result<Config> {
    let file_content =
        std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
    serde_json::from_str(&file_content)
        .map_err(|e| anyhow::anyhow!("Invalid configuration file provided: {e}"))
        .inspect(|config| trace!("loaded config: {config:?}"))
}
