//! Reporter task: consumes per-interval reports and publishes metric
//! batches, best effort. One batch per interval, at most once; a publish
//! failure is logged and never reaches the report source.
use std::sync::Arc;

use tokio::{sync::mpsc, task::JoinHandle};

use crate::config::PluginConfig;
use crate::metrics::{MetricBuilder, Report};
use crate::sinks::MetricSink;

/// Counters for one reporter run, returned when the report channel closes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReporterStats {
    pub reports_received: u64,
    pub empty_intervals: u64,
    pub batches_published: u64,
    pub publish_failures: u64,
}

/// Spawns the reporter over a channel of harness reports.
///
/// Namespace and dimensions are resolved from `config` once, here; each
/// received report is aggregated independently with no state carried
/// between intervals. The task ends when every sender is dropped.
#[must_use]
pub fn setup_reporter(
    config: &PluginConfig,
    sink: Arc<dyn MetricSink>,
    mut report_rx: mpsc::Receiver<Report>,
) -> JoinHandle<ReporterStats> {
    let namespace = config.namespace.clone();
    let builder = MetricBuilder::from_config(Some(&config.dimensions));

    tokio::spawn(async move {
        let mut stats = ReporterStats::default();

        while let Some(report) = report_rx.recv().await {
            stats.reports_received = stats.reports_received.saturating_add(1);

            let records = builder.build(&report);
            if records.is_empty() {
                stats.empty_intervals = stats.empty_intervals.saturating_add(1);
                tracing::debug!("Interval carried no entries; nothing to emit");
                continue;
            }

            match sink.put_metric_data(&namespace, &records).await {
                Ok(()) => {
                    stats.batches_published = stats.batches_published.saturating_add(1);
                    tracing::debug!(records = records.len(), "Published metric batch");
                }
                Err(err) => {
                    // Best-effort telemetry: the interval's batch is lost, the
                    // next report is processed as usual.
                    stats.publish_failures = stats.publish_failures.saturating_add(1);
                    tracing::warn!("Failed to publish metric batch: {}", err);
                }
            }
        }

        stats
    })
}
