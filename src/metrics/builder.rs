use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone as _, Utc};

use super::quantile::compute_stats;
use super::types::{Dimension, MetricRecord, MetricUnit, Report, RequestEntry};

const NANOS_PER_MILLI: f64 = 1_000_000.0;

/// Builds the per-interval metric batch from a harness report.
///
/// The dimension set and its order are fixed at construction and stamped
/// identically onto every record. Building is pure: the same report yields
/// field-equal batches on every call.
#[derive(Debug, Clone)]
pub struct MetricBuilder {
    dimensions: Vec<Dimension>,
}

impl MetricBuilder {
    #[must_use]
    pub const fn new(dimensions: Vec<Dimension>) -> Self {
        Self { dimensions }
    }

    #[must_use]
    pub fn from_config(dimensions: Option<&BTreeMap<String, String>>) -> Self {
        Self::new(dimensions_from_config(dimensions))
    }

    /// Build the ordered record batch for one interval: latency statistics,
    /// then status-code buckets, then the unconditional error total.
    ///
    /// A report with no entries carries no data for the interval and yields
    /// an empty batch; callers treat that as "nothing to emit", not an error.
    #[must_use]
    pub fn build(&self, report: &Report) -> Vec<MetricRecord> {
        if report.entries.is_empty() {
            return Vec::new();
        }

        let timestamp = batch_timestamp(&report.request_timestamps);
        let mut records = Vec::new();

        self.push_latency_records(&mut records, &report.latency_samples, timestamp);
        self.push_status_records(&mut records, &report.entries, timestamp);
        records.push(self.record(
            "Error",
            error_total(&report.errors) as f64,
            MetricUnit::None,
            timestamp,
        ));

        records
    }

    /// Six latency records converted from nanoseconds to milliseconds. An
    /// interval can have entries but no timing data (every request failed
    /// before timing started); latency records are skipped entirely then.
    fn push_latency_records(
        &self,
        records: &mut Vec<MetricRecord>,
        latency_samples: &[u64],
        timestamp: DateTime<Utc>,
    ) {
        let Some(stats) = compute_stats(latency_samples) else {
            tracing::debug!("No latency samples in interval; skipping latency records");
            return;
        };

        let named = [
            ("AverageLatency", stats.mean),
            ("MinLatency", stats.min),
            ("MaxLatency", stats.max),
            ("P50Latency", stats.p50),
            ("P95Latency", stats.p95),
            ("P99Latency", stats.p99),
        ];
        for (name, nanos) in named {
            records.push(self.record(
                name,
                nanos / NANOS_PER_MILLI,
                MetricUnit::Milliseconds,
                timestamp,
            ));
        }
    }

    /// One count record per non-empty status bucket, in bucket order.
    /// Zero-count buckets are omitted, not emitted as zero.
    fn push_status_records(
        &self,
        records: &mut Vec<MetricRecord>,
        entries: &[RequestEntry],
        timestamp: DateTime<Utc>,
    ) {
        let mut counts = StatusCounts::default();
        for entry in entries {
            counts.increment(StatusBucket::classify(entry.status_code));
        }

        for bucket in StatusBucket::ALL {
            let count = counts.get(bucket);
            if count > 0 {
                records.push(self.record(
                    bucket.label(),
                    count as f64,
                    MetricUnit::None,
                    timestamp,
                ));
            }
        }
    }

    fn record(
        &self,
        name: &str,
        value: f64,
        unit: MetricUnit,
        timestamp: DateTime<Utc>,
    ) -> MetricRecord {
        MetricRecord {
            name: name.to_owned(),
            dimensions: self.dimensions.clone(),
            timestamp,
            value,
            unit,
        }
    }
}

/// Ordered dimension set from the config mapping; absent mapping → empty.
#[must_use]
pub fn dimensions_from_config(dimensions: Option<&BTreeMap<String, String>>) -> Vec<Dimension> {
    dimensions.map_or_else(Vec::new, |map| {
        map.iter()
            .map(|(name, value)| Dimension {
                name: name.clone(),
                value: value.clone(),
            })
            .collect()
    })
}

/// The interval is represented by its end time: the latest request
/// timestamp in the report, stamped on every record of the batch.
fn batch_timestamp(request_timestamps: &[i64]) -> DateTime<Utc> {
    let Some(&latest_ms) = request_timestamps.iter().max() else {
        tracing::debug!("Report has entries but no request timestamps; using current time");
        return Utc::now();
    };
    Utc.timestamp_millis_opt(latest_ms)
        .single()
        .unwrap_or_else(Utc::now)
}

fn error_total(errors: &BTreeMap<String, u64>) -> u64 {
    errors
        .values()
        .fold(0u64, |total, &count| total.saturating_add(count))
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum StatusBucket {
    Status2xx,
    Status3xx,
    Status4xx,
    Status5xx,
    Other,
}

impl StatusBucket {
    /// Emission order of the bucket records within a batch.
    const ALL: [Self; 5] = [
        Self::Status2xx,
        Self::Status3xx,
        Self::Status4xx,
        Self::Status5xx,
        Self::Other,
    ];

    /// Codes outside 200-599 (1xx, non-HTTP) land in `Other` rather than
    /// being rejected; the harness forwards whatever the transport saw.
    const fn classify(status_code: u16) -> Self {
        match status_code {
            200..=299 => Self::Status2xx,
            300..=399 => Self::Status3xx,
            400..=499 => Self::Status4xx,
            500..=599 => Self::Status5xx,
            _ => Self::Other,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Status2xx => "2XX",
            Self::Status3xx => "3XX",
            Self::Status4xx => "4XX",
            Self::Status5xx => "5XX",
            Self::Other => "Other",
        }
    }
}

#[derive(Default)]
struct StatusCounts {
    status_2xx: u64,
    status_3xx: u64,
    status_4xx: u64,
    status_5xx: u64,
    other: u64,
}

impl StatusCounts {
    const fn increment(&mut self, bucket: StatusBucket) {
        match bucket {
            StatusBucket::Status2xx => self.status_2xx = self.status_2xx.saturating_add(1),
            StatusBucket::Status3xx => self.status_3xx = self.status_3xx.saturating_add(1),
            StatusBucket::Status4xx => self.status_4xx = self.status_4xx.saturating_add(1),
            StatusBucket::Status5xx => self.status_5xx = self.status_5xx.saturating_add(1),
            StatusBucket::Other => self.other = self.other.saturating_add(1),
        }
    }

    const fn get(&self, bucket: StatusBucket) -> u64 {
        match bucket {
            StatusBucket::Status2xx => self.status_2xx,
            StatusBucket::Status3xx => self.status_3xx,
            StatusBucket::Status4xx => self.status_4xx,
            StatusBucket::Status5xx => self.status_5xx,
            StatusBucket::Other => self.other,
        }
    }
}
