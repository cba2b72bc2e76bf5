//! Decoding of the stats line served by the remote endpoint
//!
//! The endpoint answers with a single line of seven comma-separated integers:
//!
//! ```text
//! loadAverage,memoryCapacity,memoryUsage,diskCapacity,diskUsage,networkCapacity,networkUsage\n
//! ```

use crate::{ServerMetrics, error::MalformedStats};

/// Field names in wire order
pub const FIELDS: [&str; 7] = [
    "load_average",
    "memory_capacity",
    "memory_usage",
    "disk_capacity",
    "disk_usage",
    "network_capacity",
    "network_usage",
];

/// Decode one raw payload into [`ServerMetrics`].
///
/// A single trailing newline is accepted. All seven fields have to parse,
/// otherwise the whole payload is rejected.
pub fn decode(payload: &[u8]) -> Result<ServerMetrics, MalformedStats> {
    let line = std::str::from_utf8(payload).map_err(|_| MalformedStats::NotUtf8)?;
    let line = line.strip_suffix('\n').unwrap_or(line);

    if line.is_empty() {
        return Err(MalformedStats::Empty);
    }

    let tokens = line.split(',').collect::<Vec<_>>();
    if tokens.len() != FIELDS.len() {
        return Err(MalformedStats::FieldCount {
            found: tokens.len(),
        });
    }

    let mut values = [0u64; 7];
    for (index, token) in tokens.into_iter().enumerate() {
        values[index] = parse_field(index, token)?;
    }

    let [
        load_average,
        memory_capacity,
        memory_usage,
        disk_capacity,
        disk_usage,
        network_capacity,
        network_usage,
    ] = values;

    Ok(ServerMetrics {
        load_average,
        memory_capacity,
        memory_usage,
        disk_capacity,
        disk_usage,
        network_capacity,
        network_usage,
    })
}

fn parse_field(index: usize, token: &str) -> Result<u64, MalformedStats> {
    let invalid = || MalformedStats::InvalidField {
        position: index + 1,
        field: FIELDS[index],
        token: token.to_string(),
    };

    // u64::from_str would also take a leading '+'
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    token.parse::<u64>().map_err(|_| invalid())
}

/// Render metrics in the wire format, including the trailing newline.
pub fn encode(metrics: &ServerMetrics) -> String {
    let ServerMetrics {
        load_average,
        memory_capacity,
        memory_usage,
        disk_capacity,
        disk_usage,
        network_capacity,
        network_usage,
    } = metrics;

    format!(
        "{load_average},{memory_capacity},{memory_usage},{disk_capacity},{disk_usage},{network_capacity},{network_usage}\n"
    )
}
