use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::measurement::MeasurementKind;

/// Summary of one measurement kind's extracted sequence.
///
/// `average`, `min` and `max` are rounded to 2 decimal digits using
/// round-half-away-from-zero (`(x * 100).round() / 100`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistic {
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl SummaryStatistic {
    /// Returns `None` for an empty sequence; a kind with no data produces no
    /// statistic entry at all, not a zeroed placeholder.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        let sum: f64 = values.iter().sum();
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            average: round2(sum / count as f64),
            min: round2(min),
            max: round2(max),
            count,
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One position-aligned cross-kind snapshot.
///
/// Every kind is keyed in every row; a kind whose sequence is shorter than
/// the row index maps to `None` (JSON `null`), never a fabricated value.
/// Alignment is purely positional: row i of two kinds may correspond to
/// unrelated events in the source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeasurementRow(pub BTreeMap<MeasurementKind, Option<f64>>);

impl MeasurementRow {
    pub fn get(&self, kind: MeasurementKind) -> Option<f64> {
        self.0.get(&kind).copied().flatten()
    }
}

/// The full structured output of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub filename: String,
    /// Fixed textual format `YYYY-MM-DD HH:MM:SS`.
    pub date_analyzed: String,
    pub statistics: BTreeMap<MeasurementKind, SummaryStatistic>,
    pub measurements: Vec<MeasurementRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_has_no_statistic() {
        assert!(SummaryStatistic::from_values(&[]).is_none());
    }

    #[test]
    fn test_statistic_fields() {
        let stat = SummaryStatistic::from_values(&[120.0, 130.0]).unwrap();
        assert_eq!(stat.average, 125.0);
        assert_eq!(stat.min, 120.0);
        assert_eq!(stat.max, 130.0);
        assert_eq!(stat.count, 2);
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        let stat = SummaryStatistic::from_values(&[0.005]).unwrap();
        assert_eq!(stat.average, 0.01);

        let stat = SummaryStatistic::from_values(&[-0.005]).unwrap();
        assert_eq!(stat.average, -0.01);

        let stat = SummaryStatistic::from_values(&[4.456, 4.454]).unwrap();
        assert_eq!(stat.min, 4.45);
        assert_eq!(stat.max, 4.46);
    }

    #[test]
    fn test_single_value_statistic() {
        let stat = SummaryStatistic::from_values(&[95.0]).unwrap();
        assert_eq!(stat.average, 95.0);
        assert_eq!(stat.min, 95.0);
        assert_eq!(stat.max, 95.0);
        assert_eq!(stat.count, 1);
    }

    #[test]
    fn test_row_absent_kind_serializes_as_null() {
        let mut fields = BTreeMap::new();
        fields.insert(MeasurementKind::Glucose, Some(95.0));
        fields.insert(MeasurementKind::Rbc, None);
        let row = MeasurementRow(fields);

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["glucose"], 95.0);
        assert!(json["rbc"].is_null());
    }
}
