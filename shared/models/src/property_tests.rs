//! Property-based tests for VitalScan core domain models
//!
//! Validates serialization round-trip consistency and the statistical
//! guarantees the report boundary relies on.

use proptest::prelude::*;
use std::collections::BTreeMap;

use crate::{ExtractionResult, MeasurementKind, MeasurementRow, Report, SummaryStatistic};

prop_compose! {
    fn arb_kind()(index in 0usize..MeasurementKind::ALL.len()) -> MeasurementKind {
        MeasurementKind::ALL[index]
    }
}

prop_compose! {
    fn arb_series()(values in prop::collection::vec(0.1f64..500.0, 0..8)) -> Vec<f64> {
        values
    }
}

prop_compose! {
    fn arb_extraction()(
        rbc in arb_series(),
        systolic in arb_series(),
        diastolic in arb_series(),
        glucose in arb_series()
    ) -> ExtractionResult {
        let mut extraction = ExtractionResult::new();
        for value in rbc {
            extraction.push(MeasurementKind::Rbc, value);
        }
        for value in systolic {
            extraction.push(MeasurementKind::Systolic, value);
        }
        for value in diastolic {
            extraction.push(MeasurementKind::Diastolic, value);
        }
        for value in glucose {
            extraction.push(MeasurementKind::Glucose, value);
        }
        extraction
    }
}

prop_compose! {
    fn arb_row()(
        fields in prop::collection::btree_map(
            arb_kind(),
            prop::option::of(0.1f64..500.0),
            0..4,
        )
    ) -> MeasurementRow {
        MeasurementRow(fields)
    }
}

proptest! {
    /// Serializing an extraction to JSON and back yields the same sequences
    /// in the same order.
    #[test]
    fn property_extraction_round_trip(extraction in arb_extraction()) {
        let json = serde_json::to_string(&extraction)
            .expect("Serialization should succeed for valid ExtractionResult");
        let deserialized: ExtractionResult = serde_json::from_str(&json)
            .expect("Deserialization should succeed for valid JSON");

        for kind in MeasurementKind::ALL {
            let original = extraction.values(kind);
            let restored = deserialized.values(kind);
            prop_assert_eq!(original.len(), restored.len());
            for (a, b) in original.iter().zip(restored.iter()) {
                prop_assert!((a - b).abs() < 1e-10);
            }
        }
    }

    /// The rounded average always lies within the rounded [min, max] bounds,
    /// and count equals the sequence length.
    #[test]
    fn property_statistic_bounds(values in prop::collection::vec(0.1f64..500.0, 1..32)) {
        let stat = SummaryStatistic::from_values(&values)
            .expect("Non-empty sequence must yield a statistic");

        prop_assert!(stat.min <= stat.average);
        prop_assert!(stat.average <= stat.max);
        prop_assert_eq!(stat.count, values.len());
    }

    /// An empty sequence never produces a statistic entry.
    #[test]
    fn property_empty_sequence_no_statistic(_seed in any::<u8>()) {
        prop_assert!(SummaryStatistic::from_values(&[]).is_none());
    }

    /// Reports survive a JSON round trip with their statistics and row
    /// absence markers intact.
    #[test]
    fn property_report_round_trip(
        extraction in arb_extraction(),
        rows in prop::collection::vec(arb_row(), 0..5),
        filename in "[a-z]{3,12}\\.pdf"
    ) {
        let mut statistics = BTreeMap::new();
        for (kind, values) in extraction.iter() {
            if let Some(stat) = SummaryStatistic::from_values(values) {
                statistics.insert(kind, stat);
            }
        }

        let report = Report {
            filename,
            date_analyzed: "2026-08-30 12:00:00".to_string(),
            statistics,
            measurements: rows,
        };

        let json = serde_json::to_string(&report)
            .expect("Serialization should succeed for valid Report");
        let deserialized: Report = serde_json::from_str(&json)
            .expect("Deserialization should succeed for valid JSON");

        prop_assert_eq!(&report.filename, &deserialized.filename);
        prop_assert_eq!(&report.date_analyzed, &deserialized.date_analyzed);
        prop_assert_eq!(report.statistics.len(), deserialized.statistics.len());
        prop_assert_eq!(report.measurements.len(), deserialized.measurements.len());

        let epsilon = 1e-10;
        for (kind, stat) in &report.statistics {
            let restored = &deserialized.statistics[kind];
            prop_assert!((stat.average - restored.average).abs() < epsilon);
            prop_assert!((stat.min - restored.min).abs() < epsilon);
            prop_assert!((stat.max - restored.max).abs() < epsilon);
            prop_assert_eq!(stat.count, restored.count);
        }

        for (row, restored) in report.measurements.iter().zip(deserialized.measurements.iter()) {
            for kind in MeasurementKind::ALL {
                match (row.get(kind), restored.get(kind)) {
                    (Some(a), Some(b)) => prop_assert!((a - b).abs() < epsilon),
                    (None, None) => {}
                    _ => prop_assert!(false, "absence marker changed across round trip"),
                }
            }
        }
    }
}
