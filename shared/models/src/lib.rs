//! # VitalScan Core Domain Models
//!
//! Core domain models for the VitalScan lab report analysis system. All
//! models serialize with serde into the nested key-value form returned at the
//! service boundary.
//!
//! ## Key Models
//!
//! - **MeasurementKind**: one tracked health metric category (RBC count,
//!   systolic/diastolic blood pressure, glucose)
//! - **ExtractionResult**: per-kind ordered numeric sequences pulled from
//!   document text
//! - **SummaryStatistic**: average/min/max/count for a kind with data
//! - **MeasurementRow**: one position-aligned cross-kind snapshot
//! - **Report**: the full structured output of one analysis

pub mod measurement;
pub mod report;

#[cfg(test)]
mod property_tests;

pub use measurement::{ExtractionResult, MeasurementKind};
pub use report::{MeasurementRow, Report, SummaryStatistic};
