use std::fmt;

/// Resources that carry a capacity/usage pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Memory,
    Disk,
    Network,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Memory => write!(f, "memory"),
            Resource::Disk => write!(f, "disk"),
            Resource::Network => write!(f, "network"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AlertKind {
    Load,
    Memory,
    Disk,
    Network,
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertKind::Load => write!(f, "load"),
            AlertKind::Memory => write!(f, "memory"),
            AlertKind::Disk => write!(f, "disk"),
            AlertKind::Network => write!(f, "network"),
        }
    }
}

/// A single threshold breach found in one evaluation cycle
///
/// Each variant carries the value shown to the operator. `Display` renders
/// the alert message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    /// Raw load average
    Load { load_average: u64 },

    /// Memory usage in whole percent
    Memory { usage_percent: u64 },

    /// Free disk space in MiB
    Disk { available_mb: u64 },

    /// Free bandwidth in Mbit/s
    Network { available_mbps: u64 },
}

impl Alert {
    pub fn kind(&self) -> AlertKind {
        match self {
            Alert::Load { .. } => AlertKind::Load,
            Alert::Memory { .. } => AlertKind::Memory,
            Alert::Disk { .. } => AlertKind::Disk,
            Alert::Network { .. } => AlertKind::Network,
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alert::Load { load_average } => write!(f, "Load Average is too high: {load_average}"),
            Alert::Memory { usage_percent } => {
                write!(f, "Memory usage too high: {usage_percent}%")
            }
            Alert::Disk { available_mb } => {
                write!(f, "Free disk space is too low: {available_mb} Mb left")
            }
            Alert::Network { available_mbps } => {
                write!(f, "Network bandwidth usage high: {available_mbps} Mbit/s available")
            }
        }
    }
}
