//! # Measurement Extraction
//!
//! Scans raw document text against the pattern catalog and collects the
//! numeric values into per-kind sequences.

use tracing::debug;
use vitalscan_models::ExtractionResult;

use crate::patterns::PatternCatalog;

pub struct MeasurementExtractor {
    catalog: PatternCatalog,
}

impl MeasurementExtractor {
    pub fn new(catalog: PatternCatalog) -> Self {
        Self { catalog }
    }

    /// Collects every non-overlapping match of every catalog pattern.
    ///
    /// Values land in document-scan order per pattern, and all matches of
    /// one pattern precede all matches of the next. Duplicates are kept:
    /// two patterns matching the same text both contribute. Captures that
    /// do not parse as a number are logged and skipped without affecting
    /// other matches.
    pub fn extract(&self, text: &str) -> ExtractionResult {
        let mut result = ExtractionResult::new();

        for (kind, patterns) in self.catalog.iter() {
            for pattern in patterns {
                for captures in pattern.captures_iter(text) {
                    let Some(raw) = captures.get(1) else {
                        continue;
                    };
                    match raw.as_str().parse::<f64>() {
                        Ok(value) => result.push(kind, value),
                        Err(_) => {
                            debug!(
                                kind = kind.as_str(),
                                capture = raw.as_str(),
                                "Skipping capture that is not a number"
                            );
                        }
                    }
                }
            }
        }

        result
    }
}

impl Default for MeasurementExtractor {
    fn default() -> Self {
        Self::new(PatternCatalog::standard())
    }
}
