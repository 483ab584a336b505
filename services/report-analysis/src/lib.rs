//! VitalScan report analysis core.
//!
//! The pipeline turns raw document text into a structured report: the
//! pattern catalog names the recognized clinical phrasings, the extractor
//! scans text into per-kind value sequences, the aggregator summarizes and
//! aligns them, the visualizer renders trend charts, and the report builder
//! composes the final response document.

pub mod aggregator;
pub mod extractor;
pub mod patterns;
pub mod pdf_processor;
pub mod pipeline;
pub mod report;
pub mod visualizer;
