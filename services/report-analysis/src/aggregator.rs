//! # Measurement Aggregation
//!
//! Summary statistics and the position-aligned measurement table.

use std::collections::BTreeMap;

use vitalscan_models::{ExtractionResult, MeasurementKind, MeasurementRow, SummaryStatistic};

/// Computes per-kind summary statistics. Kinds with no extracted values are
/// omitted from the map entirely, not reported as zeroed statistics.
pub fn summarize(extraction: &ExtractionResult) -> BTreeMap<MeasurementKind, SummaryStatistic> {
    extraction
        .iter()
        .filter_map(|(kind, values)| SummaryStatistic::from_values(values).map(|stat| (kind, stat)))
        .collect()
}

/// Builds the measurement table by aligning the per-kind sequences on
/// position: row `i` holds the i-th value of every kind. The table is as
/// long as the longest sequence; shorter sequences fill their remaining
/// rows with explicit absences, so every row keys every kind.
pub fn measurement_rows(extraction: &ExtractionResult) -> Vec<MeasurementRow> {
    (0..extraction.max_series_len())
        .map(|i| {
            MeasurementRow(
                extraction
                    .iter()
                    .map(|(kind, values)| (kind, values.get(i).copied()))
                    .collect(),
            )
        })
        .collect()
}
