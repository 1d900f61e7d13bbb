//! Storage backend factory.

use std::sync::Arc;

use crate::local::LocalStorage;
use crate::memory::MemoryStorage;
use crate::traits::{ObjectStorage, StorageResult};
use plateful_core::{StorageBackend, StorageConfig};

/// Build the configured storage backend.
pub async fn create_storage(config: &StorageConfig) -> StorageResult<Arc<dyn ObjectStorage>> {
    match config.backend {
        StorageBackend::Local => {
            let storage = LocalStorage::new(
                config.local_storage_path.clone(),
                config.local_storage_base_url.clone(),
            )
            .await?;
            Ok(Arc::new(storage))
        }
        StorageBackend::Memory => Ok(Arc::new(MemoryStorage::new(
            config.local_storage_base_url.clone(),
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_backend_selected() {
        let config = StorageConfig::default();
        let storage = create_storage(&config).await.unwrap();
        assert_eq!(storage.backend_type(), StorageBackend::Memory);
    }
}
