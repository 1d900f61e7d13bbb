//! Record persistence seam.
//!
//! The real document backend stays external; the engine only needs a
//! create-record call. `MemoryRecipeStore` backs the tests.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;

use plateful_core::models::RecipeRecord;

/// Persistence operation errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record rejected: {0}")]
    Rejected(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// The document persistence collaborator.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Persist one finished record. Only complete, validated records reach
    /// this call; no partial record is ever submitted.
    async fn create_record(&self, record: &RecipeRecord) -> Result<(), StoreError>;
}

/// In-memory store for tests and local development.
#[derive(Default)]
pub struct MemoryRecipeStore {
    records: Mutex<Vec<RecipeRecord>>,
}

impl MemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn records(&self) -> Vec<RecipeRecord> {
        self.records.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }
}

#[async_trait]
impl RecipeStore for MemoryRecipeStore {
    async fn create_record(&self, record: &RecipeRecord) -> Result<(), StoreError> {
        self.records.lock().await.push(record.clone());
        tracing::debug!(id = %record.id, name = %record.recipe_name, "record stored");
        Ok(())
    }
}
