//! # Measurement Pattern Catalog
//!
//! Ordered registry of the textual phrasings each measurement kind is
//! recognized by in scanned lab reports.

use regex::Regex;
use vitalscan_models::MeasurementKind;

/// Maps each measurement kind to an ordered list of recognizer patterns.
///
/// Every pattern carries exactly one capture group holding the numeric
/// value. Order matters twice over: kinds are registered in a fixed order,
/// and within a kind the extractor exhausts all matches of one pattern
/// before moving to the next.
pub struct PatternCatalog {
    entries: Vec<(MeasurementKind, Vec<Regex>)>,
}

impl PatternCatalog {
    pub fn new(entries: Vec<(MeasurementKind, Vec<Regex>)>) -> Self {
        Self { entries }
    }

    /// The standard clinical phrasings: a long form (e.g. "Red Blood Cell
    /// Count") tried before its abbreviation, each tolerating an optional
    /// `:` or `=` separator.
    pub fn standard() -> Self {
        Self::new(vec![
            (
                MeasurementKind::Rbc,
                vec![
                    Regex::new(r"Red Blood Cell Count\s*[:=]?\s*(\d+\.\d+)").unwrap(),
                    Regex::new(r"RBC\s*[:=]?\s*(\d+\.\d+)").unwrap(),
                ],
            ),
            (
                MeasurementKind::Systolic,
                vec![
                    Regex::new(r"Blood Pressure \(Systolic\)\s*[:=]?\s*(\d+)").unwrap(),
                    Regex::new(r"Systolic\s*[:=]?\s*(\d+)").unwrap(),
                ],
            ),
            (
                MeasurementKind::Diastolic,
                vec![
                    Regex::new(r"Blood Pressure \(Diastolic\)\s*[:=]?\s*(\d+)").unwrap(),
                    Regex::new(r"Diastolic\s*[:=]?\s*(\d+)").unwrap(),
                ],
            ),
            (
                MeasurementKind::Glucose,
                vec![
                    Regex::new(r"Glucose\s*[:=]?\s*(\d+)").unwrap(),
                    Regex::new(r"Blood Sugar\s*[:=]?\s*(\d+)").unwrap(),
                ],
            ),
        ])
    }

    /// Iterates entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (MeasurementKind, &[Regex])> {
        self.entries
            .iter()
            .map(|(kind, patterns)| (*kind, patterns.as_slice()))
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
