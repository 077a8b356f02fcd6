use thiserror::Error;

/// Errors from a [`crate::sinks::MetricSink`] publish attempt. The reporter
/// logs these and moves on: one dropped batch loses one interval, by the
/// at-most-once delivery contract.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Failed to serialize metric batch: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write metric batch: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },
    #[error("{context}: {source}")]
    External {
        context: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
