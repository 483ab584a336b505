use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One tracked health metric category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementKind {
    Rbc,
    Systolic,
    Diastolic,
    Glucose,
}

impl MeasurementKind {
    pub const ALL: [MeasurementKind; 4] = [
        MeasurementKind::Rbc,
        MeasurementKind::Systolic,
        MeasurementKind::Diastolic,
        MeasurementKind::Glucose,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rbc => "rbc",
            Self::Systolic => "systolic",
            Self::Diastolic => "diastolic",
            Self::Glucose => "glucose",
        }
    }

    /// Physical unit shown on chart axes.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Rbc => "10^6/μL",
            Self::Systolic | Self::Diastolic => "mmHg",
            Self::Glucose => "mg/dL",
        }
    }

    /// Human-readable label used in chart legends.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Rbc => "RBC Count",
            Self::Systolic => "Systolic",
            Self::Diastolic => "Diastolic",
            Self::Glucose => "Glucose",
        }
    }
}

/// Per-kind numeric sequences pulled from raw document text.
///
/// Every kind is always present; a kind with no matches keeps an empty
/// sequence (callers must distinguish empty from populated). Values stay in
/// the order they were matched: all matches of a kind's first pattern, then
/// all matches of its second, and so on. Duplicate-looking values from
/// overlapping pattern variants are kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    series: BTreeMap<MeasurementKind, Vec<f64>>,
}

impl ExtractionResult {
    pub fn new() -> Self {
        let series = MeasurementKind::ALL
            .iter()
            .map(|&kind| (kind, Vec::new()))
            .collect();
        Self { series }
    }

    pub fn push(&mut self, kind: MeasurementKind, value: f64) {
        self.series.entry(kind).or_default().push(value);
    }

    pub fn values(&self, kind: MeasurementKind) -> &[f64] {
        self.series.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (MeasurementKind, &[f64])> {
        self.series.iter().map(|(&kind, values)| (kind, values.as_slice()))
    }

    /// True when no kind matched anything at all.
    pub fn is_empty(&self) -> bool {
        self.series.values().all(Vec::is_empty)
    }

    /// Longest sequence among kinds with at least one value; 0 when every
    /// kind is empty.
    pub fn max_series_len(&self) -> usize {
        self.series.values().map(Vec::len).max().unwrap_or(0)
    }
}

impl Default for ExtractionResult {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&MeasurementKind::Rbc).unwrap();
        assert_eq!(json, "\"rbc\"");
        let back: MeasurementKind = serde_json::from_str("\"systolic\"").unwrap();
        assert_eq!(back, MeasurementKind::Systolic);
    }

    #[test]
    fn test_kind_units() {
        assert_eq!(MeasurementKind::Systolic.unit(), "mmHg");
        assert_eq!(MeasurementKind::Diastolic.unit(), "mmHg");
        assert_eq!(MeasurementKind::Glucose.unit(), "mg/dL");
        assert_eq!(MeasurementKind::Rbc.unit(), "10^6/μL");
    }

    #[test]
    fn test_new_extraction_has_all_kinds_empty() {
        let result = ExtractionResult::new();
        assert!(result.is_empty());
        assert_eq!(result.max_series_len(), 0);
        for kind in MeasurementKind::ALL {
            assert!(result.values(kind).is_empty());
        }
    }

    #[test]
    fn test_push_preserves_order() {
        let mut result = ExtractionResult::new();
        result.push(MeasurementKind::Glucose, 95.0);
        result.push(MeasurementKind::Glucose, 110.0);
        result.push(MeasurementKind::Glucose, 95.0); // duplicates kept

        assert_eq!(result.values(MeasurementKind::Glucose), &[95.0, 110.0, 95.0]);
        assert!(!result.is_empty());
        assert_eq!(result.max_series_len(), 3);
    }

    #[test]
    fn test_max_series_len_ignores_empty_kinds() {
        let mut result = ExtractionResult::new();
        result.push(MeasurementKind::Systolic, 120.0);
        result.push(MeasurementKind::Systolic, 130.0);
        result.push(MeasurementKind::Glucose, 95.0);

        assert_eq!(result.max_series_len(), 2);
    }
}
