use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::models::dataset::Dataset;
use crate::store::DataStore;

/// Keeps the dataset in memory. Used by tests in place of the JSON file.
#[derive(Debug, Default)]
pub struct MemoryStore {
    dataset: RwLock<Dataset>,
    loads: AtomicUsize,
    saves: AtomicUsize,
}

impl MemoryStore {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: RwLock::new(dataset),
            loads: AtomicUsize::new(0),
            saves: AtomicUsize::new(0),
        }
    }

    /// A copy of the currently stored dataset.
    pub async fn snapshot(&self) -> Dataset {
        self.dataset.read().await.clone()
    }

    /// How many times `load` has been called.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataStore for MemoryStore {
    async fn load(&self) -> Result<Dataset, StoreError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.dataset.read().await.clone())
    }

    async fn save(&self, dataset: &Dataset) -> Result<(), StoreError> {
        *self.dataset.write().await = dataset.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
