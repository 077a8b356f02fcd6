//! CloudWatch metrics-reporting plugin for an async HTTP load tester.
//!
//! This crate turns the harness's per-interval stats reports into named,
//! dimensioned, timestamped metric batches ready for a monitoring backend:
//! latency distribution statistics (min/max/mean/p50/p95/p99), status-code
//! bucket counts, and an error total. The outbound backend call sits behind
//! the [`sinks::MetricSink`] trait; the harness drives the plugin by sending
//! [`metrics::Report`] values into the channel consumed by
//! [`reporter::setup_reporter`].
pub mod config;
pub mod error;
pub mod logger;
pub mod metrics;
pub mod reporter;
pub mod sinks;
