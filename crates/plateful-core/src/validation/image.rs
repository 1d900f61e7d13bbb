//! Image attachment validation
//!
//! Checks that an attachment's Content-Type is an image type and matches the
//! file extension. This prevents Content-Type spoofing where a non-image file
//! is attached with an image Content-Type.

use std::path::Path;

/// Validate that the Content-Type is an image type matching the extension.
pub fn validate_image_content_type(filename: &str, content_type: &str) -> Result<(), String> {
    let normalized_content_type = content_type.to_lowercase();

    if !normalized_content_type.starts_with("image/") {
        return Err(format!("'{}' is not an image Content-Type", content_type));
    }

    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    if extension.is_empty() {
        return Err("File must have an extension".to_string());
    }

    let expected_content_types: Vec<&str> = match extension.as_str() {
        "jpg" | "jpeg" => vec!["image/jpeg"],
        "png" => vec!["image/png"],
        "gif" => vec!["image/gif"],
        "webp" => vec!["image/webp"],
        "avif" => vec!["image/avif"],
        "svg" => vec!["image/svg+xml"],
        "bmp" => vec!["image/bmp"],
        "ico" => vec!["image/x-icon", "image/vnd.microsoft.icon"],
        _ => {
            return Err(format!("'{}' is not an image file extension", extension));
        }
    };

    if !expected_content_types.iter().any(|ct| {
        normalized_content_type == *ct || normalized_content_type.starts_with(&format!("{};", ct))
    }) {
        return Err(format!(
            "Content-Type '{}' does not match extension '{}'. Expected one of: {}",
            content_type,
            extension,
            expected_content_types.join(", ")
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_image_type_passes() {
        assert!(validate_image_content_type("stew.jpg", "image/jpeg").is_ok());
        assert!(validate_image_content_type("stew.PNG", "image/png").is_ok());
    }

    #[test]
    fn test_non_image_content_type_rejected() {
        assert!(validate_image_content_type("stew.pdf", "application/pdf").is_err());
    }

    #[test]
    fn test_mismatched_extension_rejected() {
        assert!(validate_image_content_type("stew.png", "image/jpeg").is_err());
    }

    #[test]
    fn test_missing_extension_rejected() {
        assert!(validate_image_content_type("stew", "image/jpeg").is_err());
    }
}
