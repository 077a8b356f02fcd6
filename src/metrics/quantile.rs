/// Latency distribution statistics over one interval's raw samples.
/// Values stay in the input unit (nanoseconds); callers convert at the edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatencyStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub p50: f64,
    pub p95: f64,
    pub p99: f64,
}

/// Compute min/max/mean and the p50/p95/p99 quantiles of `samples`.
///
/// Returns `None` for an empty slice. Sorts a copy; the caller's slice is
/// never reordered. Percentiles use linear interpolation between order
/// statistics (the common statistical-package default), not nearest rank.
#[must_use]
pub fn compute_stats(samples: &[u64]) -> Option<LatencyStats> {
    let mut sorted: Vec<f64> = samples.iter().map(|&sample| sample as f64).collect();
    sorted.sort_by(f64::total_cmp);

    let min = *sorted.first()?;
    let max = *sorted.last()?;
    let sum: f64 = sorted.iter().sum();
    let mean = sum / sorted.len() as f64;

    Some(LatencyStats {
        min,
        max,
        mean,
        p50: quantile(&sorted, 0.5),
        p95: quantile(&sorted, 0.95),
        p99: quantile(&sorted, 0.99),
    })
}

/// Quantile `q` in [0, 1] of an ascending-sorted, non-empty slice.
/// `pos = (n-1)*q` lands between two order statistics; interpolate linearly
/// unless it falls exactly on the last index.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = sorted.len().saturating_sub(1) as f64 * q;
    let base = pos.floor();
    let rest = pos - base;
    let index = base as usize;
    match (sorted.get(index), sorted.get(index.saturating_add(1))) {
        (Some(&lower), Some(&upper)) => lower + rest * (upper - lower),
        (Some(&lower), None) => lower,
        (None, _) => 0.0,
    }
}
