//! Centralized storage key generation and validation.

use crate::traits::{StorageError, StorageResult};

/// Key for an uploaded recipe image.
pub(crate) fn image_key(filename: &str) -> String {
    format!("images/{}", filename)
}

/// Reject keys that could escape the storage root.
pub(crate) fn validate_key(storage_key: &str) -> StorageResult<()> {
    if storage_key.contains("..") || storage_key.starts_with('/') {
        return Err(StorageError::InvalidKey(
            "Storage key contains invalid characters".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_key_layout() {
        assert_eq!(image_key("stew.jpg"), "images/stew.jpg");
    }

    #[test]
    fn test_validate_key_rejects_traversal() {
        assert!(validate_key("images/../../etc/passwd").is_err());
        assert!(validate_key("/etc/passwd").is_err());
        assert!(validate_key("images/stew.jpg").is_ok());
    }
}
