use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum VitalScanError {
    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Document processing error: {message}")]
    DocumentProcessing { message: String },

    #[error("No medical data found in the document")]
    NoDataFound { preview: String },

    #[error("Chart rendering error: {chart} - {message}")]
    ArtifactWrite { chart: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl VitalScanError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn document_processing(message: impl Into<String>) -> Self {
        Self::DocumentProcessing {
            message: message.into(),
        }
    }

    pub fn no_data_found(preview: impl Into<String>) -> Self {
        Self::NoDataFound {
            preview: preview.into(),
        }
    }

    pub fn artifact_write(chart: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ArtifactWrite {
            chart: chart.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::DocumentProcessing { .. } => "DOCUMENT_PROCESSING_ERROR",
            Self::NoDataFound { .. } => "NO_DATA_FOUND",
            Self::ArtifactWrite { .. } => "ARTIFACT_WRITE_ERROR",
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Internal { .. } => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } => 400,
            Self::DocumentProcessing { .. } => 422,
            Self::NoDataFound { .. } => 422,
            Self::ArtifactWrite { .. } => 500,
            Self::Configuration { .. } => 500,
            Self::NotFound { .. } => 404,
            Self::Internal { .. } => 500,
        }
    }
}

pub type VitalScanResult<T> = Result<T, VitalScanError>;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl From<VitalScanError> for ErrorResponse {
    fn from(error: VitalScanError) -> Self {
        let details = match &error {
            // Diagnostic preview of the scanned text for the no-data outcome.
            VitalScanError::NoDataFound { preview } => {
                Some(serde_json::json!({ "debug_text": preview }))
            }
            VitalScanError::ArtifactWrite { chart, .. } => {
                Some(serde_json::json!({ "chart": chart }))
            }
            _ => None,
        };

        Self {
            error: error.to_string(),
            code: error.error_code().to_string(),
            message: error.to_string(),
            details,
        }
    }
}

// Conversion from common error types
impl From<std::io::Error> for VitalScanError {
    fn from(error: std::io::Error) -> Self {
        Self::internal(error.to_string())
    }
}

impl From<serde_json::Error> for VitalScanError {
    fn from(error: serde_json::Error) -> Self {
        Self::validation("JSON", error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_and_status() {
        let error = VitalScanError::validation("file", "missing");
        assert_eq!(error.error_code(), "VALIDATION_ERROR");
        assert_eq!(error.http_status_code(), 400);

        let error = VitalScanError::no_data_found("--- Page 1 ---");
        assert_eq!(error.error_code(), "NO_DATA_FOUND");
        assert_eq!(error.http_status_code(), 422);

        let error = VitalScanError::artifact_write("blood_pressure", "disk full");
        assert_eq!(error.http_status_code(), 500);
    }

    #[test]
    fn test_no_data_response_carries_preview() {
        let response = ErrorResponse::from(VitalScanError::no_data_found("Page 1 text"));
        assert_eq!(response.code, "NO_DATA_FOUND");
        assert_eq!(response.details.unwrap()["debug_text"], "Page 1 text");
    }
}
