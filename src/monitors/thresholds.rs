use tracing::trace;

use crate::{
    ServerMetrics,
    alerts::{Alert, Resource},
    config::Thresholds,
    error::InvalidCapacity,
};

const BYTES_PER_MEBIBYTE: u64 = 1024 * 1024;

const BITS_PER_MEGABIT: u64 = 1_000_000;

/// Evaluate one set of metrics against the thresholds.
///
/// Alerts come back in the order load, memory, disk, network. A value equal
/// to its threshold does not alert. A zero capacity fails the whole
/// evaluation.
pub fn evaluate(
    metrics: &ServerMetrics,
    thresholds: &Thresholds,
) -> Result<Vec<Alert>, InvalidCapacity> {
    let mut alerts = vec![];

    if metrics.load_average > thresholds.load {
        alerts.push(Alert::Load {
            load_average: metrics.load_average,
        });
    }

    let memory = usage_percent(
        metrics.memory_usage,
        metrics.memory_capacity,
        Resource::Memory,
    )?;
    if memory > thresholds.memory {
        alerts.push(Alert::Memory {
            usage_percent: memory,
        });
    }

    let disk = usage_percent(metrics.disk_usage, metrics.disk_capacity, Resource::Disk)?;
    if disk > thresholds.disk {
        let available = metrics.disk_capacity.saturating_sub(metrics.disk_usage);
        alerts.push(Alert::Disk {
            available_mb: available / BYTES_PER_MEBIBYTE,
        });
    }

    let network = usage_percent(
        metrics.network_usage,
        metrics.network_capacity,
        Resource::Network,
    )?;
    if network > thresholds.network {
        let available = metrics
            .network_capacity
            .saturating_sub(metrics.network_usage);
        alerts.push(Alert::Network {
            available_mbps: available / BITS_PER_MEGABIT,
        });
    }

    trace!(
        "load {} memory {memory}% disk {disk}% network {network}% -> {} alerts",
        metrics.load_average,
        alerts.len()
    );

    Ok(alerts)
}

/// `floor(usage / capacity * 100)`, tolerating usage above capacity.
pub fn usage_percent(
    usage: u64,
    capacity: u64,
    resource: Resource,
) -> Result<u64, InvalidCapacity> {
    if capacity == 0 {
        return Err(InvalidCapacity { resource });
    }

    let percent = u128::from(usage) * 100 / u128::from(capacity);
    Ok(u64::try_from(percent).unwrap_or(u64::MAX))
}
