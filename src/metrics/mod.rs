//! Statistical aggregation and metric-batch construction.
mod builder;
mod quantile;
mod types;

#[cfg(test)]
mod tests;

pub use builder::{MetricBuilder, dimensions_from_config};
pub use quantile::{LatencyStats, compute_stats};
pub use types::{Dimension, MetricRecord, MetricUnit, Report, RequestEntry};
