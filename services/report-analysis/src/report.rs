//! Report assembly.

use chrono::Local;
use vitalscan_models::{ExtractionResult, Report};

use crate::aggregator::{measurement_rows, summarize};

/// Composes the final report document: original filename, analysis
/// timestamp, per-kind statistics and the aligned measurement table.
pub fn build_report(filename: &str, extraction: &ExtractionResult) -> Report {
    Report {
        filename: filename.to_string(),
        date_analyzed: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        statistics: summarize(extraction),
        measurements: measurement_rows(extraction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use vitalscan_models::MeasurementKind;

    #[test]
    fn test_report_fields() {
        let mut extraction = ExtractionResult::new();
        extraction.push(MeasurementKind::Glucose, 95.0);
        extraction.push(MeasurementKind::Glucose, 110.0);

        let report = build_report("labs.pdf", &extraction);
        assert_eq!(report.filename, "labs.pdf");
        assert_eq!(report.measurements.len(), 2);
        assert_eq!(report.statistics.len(), 1);
        assert_eq!(report.statistics[&MeasurementKind::Glucose].average, 102.5);
    }

    #[test]
    fn test_timestamp_format() {
        let report = build_report("labs.pdf", &ExtractionResult::new());
        assert!(
            NaiveDateTime::parse_from_str(&report.date_analyzed, "%Y-%m-%d %H:%M:%S").is_ok(),
            "unexpected timestamp: {}",
            report.date_analyzed
        );
    }
}
