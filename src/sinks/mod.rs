//! Outbound seam to the monitoring backend.
mod json;

pub use json::JsonFileSink;

use async_trait::async_trait;

use crate::error::PublishError;
use crate::metrics::MetricRecord;

/// One "publish metric batch" call per interval. Implementations own
/// transport, credentials, and retry policy; the reporter only logs a
/// returned error and moves on to the next interval.
#[async_trait]
pub trait MetricSink: Send + Sync {
    /// Publish one batch of records under `namespace`.
    ///
    /// # Errors
    ///
    /// Returns an error when the batch cannot be serialized or delivered.
    async fn put_metric_data(
        &self,
        namespace: &str,
        records: &[MetricRecord],
    ) -> Result<(), PublishError>;
}
