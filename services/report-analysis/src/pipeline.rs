//! # Analysis Pipeline
//!
//! Orchestrates text extraction, measurement scanning, chart rendering and
//! report assembly for one uploaded document.

use std::collections::BTreeMap;
use std::time::Instant;

use serde::Serialize;
use tracing::info;
use vitalscan_models::Report;
use vitalscan_utils::{AppConfig, VitalScanError, VitalScanResult};

use crate::extractor::MeasurementExtractor;
use crate::patterns::PatternCatalog;
use crate::pdf_processor::{concatenate_pages, PdfProcessor};
use crate::report::build_report;
use crate::visualizer::ChartRenderer;

/// How much scanned text the no-data outcome carries back for diagnostics.
const PREVIEW_CHARS: usize = 1000;

/// Everything a successful analysis returns.
#[derive(Debug, Serialize)]
pub struct AnalysisOutcome {
    pub report: Report,
    /// Chart name mapped to its public URL path.
    pub visualizations: BTreeMap<String, String>,
    /// Wall-clock seconds spent on the analysis, rounded to 2 decimals.
    pub processing_time: f64,
}

pub struct AnalysisService {
    pdf: PdfProcessor,
    extractor: MeasurementExtractor,
    renderer: ChartRenderer,
}

impl AnalysisService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            pdf: PdfProcessor::new(),
            extractor: MeasurementExtractor::new(PatternCatalog::standard()),
            renderer: ChartRenderer::new(&config.storage, &config.charts),
        }
    }

    /// Full pipeline over raw PDF bytes.
    pub fn analyze(&self, filename: &str, data: &[u8]) -> VitalScanResult<AnalysisOutcome> {
        let pages = self.pdf.extract_pages(data)?;
        let full_text = concatenate_pages(&pages);
        self.analyze_text(filename, &full_text)
    }

    /// Pipeline entry for callers that already hold page-marked text.
    ///
    /// Fails with the no-data outcome before any chart is rendered when
    /// nothing matched; a chart failure afterwards discards the whole
    /// analysis rather than returning a partial report.
    pub fn analyze_text(&self, filename: &str, full_text: &str) -> VitalScanResult<AnalysisOutcome> {
        let started = Instant::now();

        let extraction = self.extractor.extract(full_text);
        if extraction.is_empty() {
            return Err(VitalScanError::no_data_found(text_preview(full_text)));
        }

        let visualizations = self.renderer.render_all(&extraction)?;
        let report = build_report(filename, &extraction);

        let processing_time = (started.elapsed().as_secs_f64() * 100.0).round() / 100.0;
        info!(
            filename,
            rows = report.measurements.len(),
            charts = visualizations.len(),
            processing_time,
            "Analysis complete"
        );

        Ok(AnalysisOutcome {
            report,
            visualizations,
            processing_time,
        })
    }
}

/// First `PREVIEW_CHARS` characters of the scanned text, with an ellipsis
/// marker when truncated.
fn text_preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_CHARS {
        let truncated: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{truncated}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(text_preview("Glucose: 95"), "Glucose: 95");
    }

    #[test]
    fn test_preview_exact_boundary_unchanged() {
        let text = "x".repeat(PREVIEW_CHARS);
        assert_eq!(text_preview(&text), text);
    }

    #[test]
    fn test_preview_truncates_with_marker() {
        let text = "x".repeat(PREVIEW_CHARS + 50);
        let preview = text_preview(&text);
        assert_eq!(preview.chars().count(), PREVIEW_CHARS + 3);
        assert!(preview.ends_with("..."));
    }
}
