//! Error types for the polling pipeline
//!
//! Failures fall into two groups:
//!
//! - [`FetchError`]: the endpoint could not be reached or answered badly.
//!   Recovered inside the poller, which only counts them.
//! - [`PipelineError`]: a payload arrived but could not be turned into
//!   alerts. Recovered inside the driver, which skips the cycle.

use std::fmt;
use std::time::Duration;

use crate::alerts::Resource;

/// Errors raised while fetching one payload from the stats endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection could not be established or the request failed in flight
    Transport(String),

    /// No answer within the configured request timeout
    Timeout(Duration),

    /// Endpoint answered with a non-success status code
    Status(u16),

    /// Response body could not be read
    Body(String),
}

impl FetchError {
    /// Whether the endpoint was never reached (as opposed to answering badly)
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_) | FetchError::Timeout(_))
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "failed to send request: {}", msg),
            FetchError::Timeout(timeout) => {
                write!(f, "request timed out after {}ms", timeout.as_millis())
            }
            FetchError::Status(status) => write!(f, "unexpected HTTP status: {}", status),
            FetchError::Body(msg) => write!(f, "failed to read response body: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// A payload that does not decode into seven integers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedStats {
    /// Payload is not valid UTF-8
    NotUtf8,

    /// Payload carries no data at all
    Empty,

    /// Wrong number of comma-separated tokens
    FieldCount { found: usize },

    /// A token is not a non-negative base-10 integer
    InvalidField {
        /// 1-based position of the token in the line
        position: usize,
        field: &'static str,
        token: String,
    },
}

impl fmt::Display for MalformedStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedStats::NotUtf8 => write!(f, "malformed stats: payload is not valid UTF-8"),
            MalformedStats::Empty => write!(f, "malformed stats: empty payload"),
            MalformedStats::FieldCount { found } => {
                write!(f, "malformed stats: expected 7 fields, found {}", found)
            }
            MalformedStats::InvalidField {
                position,
                field,
                token,
            } => write!(
                f,
                "malformed stats: field {} ({}) is not an integer: {:?}",
                position, field, token
            ),
        }
    }
}

impl std::error::Error for MalformedStats {}

/// A capacity of zero where a usage ratio has to be computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCapacity {
    pub resource: Resource,
}

impl fmt::Display for InvalidCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid capacity: {} capacity is zero", self.resource)
    }
}

impl std::error::Error for InvalidCapacity {}

/// Faults that make the driver skip a single payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    Malformed(MalformedStats),
    InvalidCapacity(InvalidCapacity),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Malformed(err) => write!(f, "{}", err),
            PipelineError::InvalidCapacity(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Malformed(err) => Some(err),
            PipelineError::InvalidCapacity(err) => Some(err),
        }
    }
}

impl From<MalformedStats> for PipelineError {
    fn from(err: MalformedStats) -> Self {
        PipelineError::Malformed(err)
    }
}

impl From<InvalidCapacity> for PipelineError {
    fn from(err: InvalidCapacity) -> Self {
        PipelineError::InvalidCapacity(err)
    }
}
