pub mod actors;
pub mod alerts;
pub mod config;
pub mod error;
pub mod monitors;
pub mod parser;
pub mod transport;
pub mod util;

use serde::{Deserialize, Serialize};

/// One HTTP response body as fetched from the stats endpoint.
pub type RawPayload = Vec<u8>;

/// Statistics reported by the remote host for a single poll cycle.
///
/// `usage <= capacity` is not enforced; the remote side is trusted but may
/// report more usage than capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerMetrics {
    pub load_average: u64,
    pub memory_capacity: u64,
    pub memory_usage: u64,
    pub disk_capacity: u64,
    pub disk_usage: u64,
    pub network_capacity: u64,
    pub network_usage: u64,
}
