use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::keys;
use crate::traits::{ObjectStorage, StorageError, StorageResult};
use plateful_core::StorageBackend;

/// In-memory storage backend. Used by tests and as a stand-in when no real
/// backend is configured; contents vanish with the process.
#[derive(Default)]
pub struct MemoryStorage {
    base_url: String,
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new(base_url: impl Into<String>) -> Self {
        MemoryStorage {
            base_url: base_url.into(),
            objects: Mutex::new(HashMap::new()),
        }
    }

    fn generate_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), key)
    }

    pub async fn object_count(&self) -> usize {
        self.objects.lock().await.len()
    }
}

#[async_trait]
impl ObjectStorage for MemoryStorage {
    async fn upload(
        &self,
        filename: &str,
        _content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<String> {
        let key = keys::image_key(filename);
        keys::validate_key(&key)?;

        let size = data.len();
        self.objects.lock().await.insert(key.clone(), data);

        tracing::debug!(key = %key, size_bytes = size, "Memory storage upload");

        Ok(self.generate_url(&key))
    }

    async fn download(&self, storage_key: &str) -> StorageResult<Vec<u8>> {
        self.objects
            .lock()
            .await
            .get(storage_key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(storage_key.to_string()))
    }

    async fn exists(&self, storage_key: &str) -> StorageResult<bool> {
        Ok(self.objects.lock().await.contains_key(storage_key))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upload_then_download() {
        let storage = MemoryStorage::new("http://test");

        let url = storage
            .upload("stew.jpg", "image/jpeg", vec![9, 9])
            .await
            .unwrap();

        assert_eq!(url, "http://test/images/stew.jpg");
        assert_eq!(storage.download("images/stew.jpg").await.unwrap(), vec![9, 9]);
        assert_eq!(storage.object_count().await, 1);
    }

    #[tokio::test]
    async fn test_missing_object_is_not_found() {
        let storage = MemoryStorage::new("http://test");
        assert!(matches!(
            storage.download("images/none.jpg").await,
            Err(StorageError::NotFound(_))
        ));
    }
}
