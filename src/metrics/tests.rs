use super::*;
use std::collections::BTreeMap;

const EPSILON: f64 = 1e-9;

fn close(left: f64, right: f64) -> bool {
    (left - right).abs() < EPSILON
}

fn entries(status_codes: &[u16]) -> Vec<RequestEntry> {
    status_codes
        .iter()
        .map(|&status_code| RequestEntry { status_code })
        .collect()
}

fn sample_report() -> Report {
    Report {
        latency_samples: vec![10_000_000, 20_000_000, 30_000_000, 40_000_000],
        request_timestamps: vec![1_700_000_000_000, 1_700_000_000_500, 1_700_000_001_000],
        entries: entries(&[200, 201, 404, 500, 503]),
        errors: BTreeMap::from([("timeout".to_owned(), 2), ("reset".to_owned(), 1)]),
    }
}

fn find_record<'batch>(records: &'batch [MetricRecord], name: &str) -> Result<&'batch MetricRecord, String> {
    records
        .iter()
        .find(|record| record.name == name)
        .ok_or_else(|| format!("Missing record '{}'", name))
}

#[test]
fn stats_are_order_statistics_monotone() -> Result<(), String> {
    let samples = [13, 7, 42, 5, 99, 21, 8, 8, 60, 3];
    let stats = compute_stats(&samples).ok_or("Expected stats for non-empty samples")?;

    if stats.min > stats.p50 || stats.p50 > stats.p95 || stats.p95 > stats.p99 {
        return Err(format!("Non-monotone quantiles: {:?}", stats));
    }
    if stats.p99 > stats.max {
        return Err(format!("p99 above max: {:?}", stats));
    }
    Ok(())
}

#[test]
fn mean_is_independent_of_sample_order() -> Result<(), String> {
    let forward = compute_stats(&[1, 2, 3, 4, 5, 100]).ok_or("Expected stats")?;
    let shuffled = compute_stats(&[100, 3, 1, 5, 2, 4]).ok_or("Expected stats")?;

    if !close(forward.mean, shuffled.mean) {
        return Err(format!(
            "Mean depends on order: {} vs {}",
            forward.mean, shuffled.mean
        ));
    }
    if !close(forward.mean, 115.0 / 6.0) {
        return Err(format!("Unexpected mean: {}", forward.mean));
    }
    Ok(())
}

#[test]
fn single_sample_collapses_all_statistics() -> Result<(), String> {
    let stats = compute_stats(&[37]).ok_or("Expected stats")?;
    for (name, value) in [
        ("min", stats.min),
        ("max", stats.max),
        ("mean", stats.mean),
        ("p50", stats.p50),
        ("p95", stats.p95),
        ("p99", stats.p99),
    ] {
        if !close(value, 37.0) {
            return Err(format!("Expected {} == 37, got {}", name, value));
        }
    }
    Ok(())
}

#[test]
fn quantiles_interpolate_linearly_between_order_statistics() -> Result<(), String> {
    // n = 4: p50 pos = 1.5, p95 pos = 2.85, p99 pos = 2.97.
    let stats = compute_stats(&[10, 20, 30, 40]).ok_or("Expected stats")?;

    if !close(stats.p50, 25.0) {
        return Err(format!("Expected p50 25, got {}", stats.p50));
    }
    if !close(stats.p95, 38.5) {
        return Err(format!("Expected p95 38.5, got {}", stats.p95));
    }
    if !close(stats.p99, 39.7) {
        return Err(format!("Expected p99 39.7, got {}", stats.p99));
    }
    Ok(())
}

#[test]
fn empty_samples_yield_no_stats() -> Result<(), String> {
    if compute_stats(&[]).is_some() {
        return Err("Expected None for empty samples".to_owned());
    }
    Ok(())
}

#[test]
fn average_latency_is_converted_to_milliseconds() -> Result<(), String> {
    let builder = MetricBuilder::new(Vec::new());
    let records = builder.build(&sample_report());

    let average = find_record(&records, "AverageLatency")?;
    if !close(average.value, 25.0) {
        return Err(format!("Expected 25 ms, got {}", average.value));
    }
    if average.unit != MetricUnit::Milliseconds {
        return Err("Expected Milliseconds unit".to_owned());
    }
    Ok(())
}

#[test]
fn status_buckets_count_by_leading_digit_and_omit_empty() -> Result<(), String> {
    let builder = MetricBuilder::new(Vec::new());
    let records = builder.build(&sample_report());

    for (name, expected) in [("2XX", 2.0), ("4XX", 1.0), ("5XX", 2.0)] {
        let record = find_record(&records, name)?;
        if !close(record.value, expected) {
            return Err(format!("Expected {} == {}, got {}", name, expected, record.value));
        }
        if record.unit != MetricUnit::None {
            return Err(format!("Expected unit None on {}", name));
        }
    }
    if records.iter().any(|record| record.name == "3XX") {
        return Err("3XX bucket should be omitted when empty".to_owned());
    }
    Ok(())
}

#[test]
fn out_of_range_status_codes_land_in_other_bucket() -> Result<(), String> {
    let builder = MetricBuilder::new(Vec::new());
    let report = Report {
        request_timestamps: vec![1_700_000_000_000],
        entries: entries(&[100, 200, 999]),
        ..Report::default()
    };
    let records = builder.build(&report);

    let other = find_record(&records, "Other")?;
    if !close(other.value, 2.0) {
        return Err(format!("Expected Other == 2, got {}", other.value));
    }
    Ok(())
}

#[test]
fn empty_entries_produce_no_records_at_all() -> Result<(), String> {
    let builder = MetricBuilder::new(Vec::new());
    let report = Report {
        latency_samples: vec![10_000_000],
        request_timestamps: vec![1_700_000_000_000],
        entries: Vec::new(),
        errors: BTreeMap::from([("timeout".to_owned(), 9)]),
    };

    if !builder.build(&report).is_empty() {
        return Err("Expected empty batch for empty entries".to_owned());
    }
    Ok(())
}

#[test]
fn error_record_sums_all_error_kinds() -> Result<(), String> {
    let builder = MetricBuilder::new(Vec::new());
    let records = builder.build(&sample_report());

    let error = find_record(&records, "Error")?;
    if !close(error.value, 3.0) {
        return Err(format!("Expected Error == 3, got {}", error.value));
    }
    Ok(())
}

#[test]
fn error_record_is_emitted_even_when_no_errors_occurred() -> Result<(), String> {
    let builder = MetricBuilder::new(Vec::new());
    let report = Report {
        latency_samples: vec![5_000_000],
        request_timestamps: vec![1_700_000_000_000],
        entries: entries(&[200]),
        errors: BTreeMap::new(),
    };
    let records = builder.build(&report);

    let error = find_record(&records, "Error")?;
    if !close(error.value, 0.0) {
        return Err(format!("Expected Error == 0, got {}", error.value));
    }
    Ok(())
}

#[test]
fn missing_latency_samples_skip_latency_records_only() -> Result<(), String> {
    let builder = MetricBuilder::new(Vec::new());
    let report = Report {
        latency_samples: Vec::new(),
        request_timestamps: vec![1_700_000_000_000],
        entries: entries(&[503, 503]),
        errors: BTreeMap::from([("timeout".to_owned(), 2)]),
    };
    let records = builder.build(&report);

    if records.iter().any(|record| record.name.ends_with("Latency")) {
        return Err("Expected no latency records without samples".to_owned());
    }
    let bucket = find_record(&records, "5XX")?;
    if !close(bucket.value, 2.0) {
        return Err(format!("Expected 5XX == 2, got {}", bucket.value));
    }
    find_record(&records, "Error")?;
    Ok(())
}

#[test]
fn batch_is_stamped_with_the_latest_request_timestamp() -> Result<(), String> {
    let builder = MetricBuilder::new(Vec::new());
    let records = builder.build(&sample_report());

    let first = records.first().ok_or("Expected at least one record")?;
    if first.timestamp.timestamp_millis() != 1_700_000_001_000 {
        return Err(format!("Unexpected timestamp: {}", first.timestamp));
    }
    if records
        .iter()
        .any(|record| record.timestamp != first.timestamp)
    {
        return Err("Expected one timestamp across the batch".to_owned());
    }
    Ok(())
}

#[test]
fn records_keep_construction_order() -> Result<(), String> {
    let builder = MetricBuilder::new(Vec::new());
    let records = builder.build(&sample_report());

    let names: Vec<&str> = records.iter().map(|record| record.name.as_str()).collect();
    let expected = [
        "AverageLatency",
        "MinLatency",
        "MaxLatency",
        "P50Latency",
        "P95Latency",
        "P99Latency",
        "2XX",
        "4XX",
        "5XX",
        "Error",
    ];
    if names != expected {
        return Err(format!("Unexpected record order: {:?}", names));
    }
    Ok(())
}

#[test]
fn building_twice_yields_field_equal_batches() -> Result<(), String> {
    let builder = MetricBuilder::new(vec![Dimension {
        name: "Fleet".to_owned(),
        value: "canary".to_owned(),
    }]);
    let report = sample_report();

    let first = builder.build(&report);
    let second = builder.build(&report);
    if first != second {
        return Err("Expected identical batches from the same report".to_owned());
    }
    Ok(())
}

#[test]
fn dimensions_are_attached_to_every_record() -> Result<(), String> {
    let dimensions = dimensions_from_config(Some(&BTreeMap::from([
        ("Fleet".to_owned(), "canary".to_owned()),
        ("Region".to_owned(), "us-east-1".to_owned()),
    ])));
    let builder = MetricBuilder::new(dimensions.clone());
    let records = builder.build(&sample_report());

    if records.is_empty() {
        return Err("Expected a non-empty batch".to_owned());
    }
    for record in &records {
        if record.dimensions != dimensions {
            return Err(format!("Record '{}' lost its dimensions", record.name));
        }
    }
    // BTreeMap iteration order is by key.
    let names: Vec<&str> = dimensions
        .iter()
        .map(|dimension| dimension.name.as_str())
        .collect();
    if names != ["Fleet", "Region"] {
        return Err(format!("Unexpected dimension order: {:?}", names));
    }
    Ok(())
}

#[test]
fn absent_dimension_mapping_yields_empty_set() -> Result<(), String> {
    if !dimensions_from_config(None).is_empty() {
        return Err("Expected empty dimension set".to_owned());
    }
    Ok(())
}
