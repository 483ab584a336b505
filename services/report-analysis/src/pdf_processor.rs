//! # PDF Text Extraction
//!
//! Turns an uploaded PDF into page-delimited raw text for the extractor.

use vitalscan_utils::{VitalScanError, VitalScanResult};

pub struct PdfProcessor;

impl PdfProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Extracts the textual content of a PDF held in memory, one string per
    /// page. pdf-extract yields the document as a single text stream, so
    /// the whole document currently arrives as one page entry.
    pub fn extract_pages(&self, data: &[u8]) -> VitalScanResult<Vec<String>> {
        let text = pdf_extract::extract_text_from_mem(data)
            .map_err(|e| VitalScanError::document_processing(e.to_string()))?;
        Ok(vec![text])
    }
}

impl Default for PdfProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Joins per-page text under human-readable page markers. The markers stay
/// in the text handed to the extractor; they never match a measurement
/// pattern but keep diagnostics readable.
pub fn concatenate_pages(pages: &[String]) -> String {
    let mut full_text = String::new();
    for (i, page) in pages.iter().enumerate() {
        full_text.push_str(&format!("--- Page {} ---\n{}\n", i + 1, page));
    }
    full_text
}
