//! Configuration module
//!
//! Environment-driven configuration for the storage backend. Values are read
//! once at startup; a `.env` file is honored if present.

use std::env;
use std::str::FromStr;

use crate::error::AppError;
use crate::storage_types::StorageBackend;

const DEFAULT_LOCAL_STORAGE_PATH: &str = "./data/images";
const DEFAULT_LOCAL_STORAGE_BASE_URL: &str = "http://localhost:3000/images";

/// Object-storage configuration.
#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub local_storage_path: String,
    pub local_storage_base_url: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            backend: StorageBackend::Memory,
            local_storage_path: DEFAULT_LOCAL_STORAGE_PATH.to_string(),
            local_storage_base_url: DEFAULT_LOCAL_STORAGE_BASE_URL.to_string(),
        }
    }
}

impl StorageConfig {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let backend = match env::var("STORAGE_BACKEND") {
            Ok(value) => StorageBackend::from_str(&value).map_err(AppError::Config)?,
            Err(_) => StorageBackend::Local,
        };

        let local_storage_path = env::var("LOCAL_STORAGE_PATH")
            .unwrap_or_else(|_| DEFAULT_LOCAL_STORAGE_PATH.to_string());
        let local_storage_base_url = env::var("LOCAL_STORAGE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_LOCAL_STORAGE_BASE_URL.to_string());

        Ok(StorageConfig {
            backend,
            local_storage_path,
            local_storage_base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::Memory);
        assert_eq!(config.local_storage_path, DEFAULT_LOCAL_STORAGE_PATH);
    }
}
