use std::path::PathBuf;

use async_trait::async_trait;
use chrono::SecondsFormat;

use crate::error::PublishError;
use crate::metrics::MetricRecord;

use super::MetricSink;

/// File-backed sink writing each batch as one JSON document in the
/// backend's `put_metric_data` parameter shape. Useful for dry runs and
/// tests; a real backend client implements [`MetricSink`] the same way.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn batch_payload(namespace: &str, records: &[MetricRecord]) -> serde_json::Value {
        let metric_data: Vec<serde_json::Value> = records
            .iter()
            .map(|record| {
                let dimensions: Vec<serde_json::Value> = record
                    .dimensions
                    .iter()
                    .map(|dimension| {
                        serde_json::json!({
                            "Name": dimension.name,
                            "Value": dimension.value,
                        })
                    })
                    .collect();
                serde_json::json!({
                    "MetricName": record.name,
                    "Dimensions": dimensions,
                    "Timestamp": record
                        .timestamp
                        .to_rfc3339_opts(SecondsFormat::Millis, true),
                    "Value": record.value,
                    "Unit": record.unit.wire_label(),
                })
            })
            .collect();

        serde_json::json!({
            "Namespace": namespace,
            "MetricData": metric_data,
        })
    }
}

#[async_trait]
impl MetricSink for JsonFileSink {
    async fn put_metric_data(
        &self,
        namespace: &str,
        records: &[MetricRecord],
    ) -> Result<(), PublishError> {
        let payload = Self::batch_payload(namespace, records);
        let json = serde_json::to_vec_pretty(&payload)
            .map_err(|err| PublishError::Serialize { source: err })?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|err| PublishError::Write { source: err })?;
        Ok(())
    }
}
