use crate::error::{VitalScanError, VitalScanResult};

pub fn validate_file_type(file_name: &str, allowed_types: &[&str]) -> VitalScanResult<()> {
    let extension = std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if !allowed_types.contains(&extension.to_lowercase().as_str()) {
        return Err(VitalScanError::validation(
            "file_type",
            format!(
                "File type '{}' not allowed. Allowed types: {}",
                extension,
                allowed_types.join(", ")
            ),
        ));
    }

    Ok(())
}

pub fn validate_file_size(file_size: u64, max_size: u64) -> VitalScanResult<()> {
    if file_size > max_size {
        return Err(VitalScanError::validation(
            "file_size",
            format!(
                "File size {} bytes exceeds maximum allowed size {} bytes",
                file_size, max_size
            ),
        ));
    }

    Ok(())
}

/// Reduces a client-supplied filename to a safe storage name: the final path
/// component with anything outside `[A-Za-z0-9._-]` replaced by `_` and
/// leading dots stripped.
pub fn sanitize_filename(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let trimmed = cleaned.trim_start_matches('.');
    if trimmed.is_empty() {
        "document".to_string()
    } else {
        trimmed.to_string()
    }
}
