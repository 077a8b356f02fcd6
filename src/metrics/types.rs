use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Per-interval snapshot emitted by the harness at each stats boundary.
///
/// All sequences cover the same interval: one latency sample and one
/// timestamp per completed request, one entry per request outcome. The
/// `errors` map counts transport-level failures (timeout, connection reset)
/// keyed by kind, independent of HTTP status codes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Report {
    /// Request latencies in nanoseconds.
    #[serde(default)]
    pub latency_samples: Vec<u64>,
    /// Request completion times in epoch milliseconds.
    #[serde(default)]
    pub request_timestamps: Vec<i64>,
    #[serde(default)]
    pub entries: Vec<RequestEntry>,
    #[serde(default)]
    pub errors: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RequestEntry {
    pub status_code: u16,
}

/// One name/value tag attached uniformly to every record of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricUnit {
    Milliseconds,
    None,
}

impl MetricUnit {
    /// Label the monitoring backend expects on the wire.
    #[must_use]
    pub const fn wire_label(self) -> &'static str {
        match self {
            Self::Milliseconds => "Milliseconds",
            Self::None => "None",
        }
    }
}

/// One named, dimensioned, timestamped observation ready for the backend.
/// Immutable once constructed; a report produces a fixed-shape batch.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRecord {
    pub name: String,
    pub dimensions: Vec<Dimension>,
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    pub unit: MetricUnit,
}
