//! Persistence backends for the [`Dataset`] document.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::dataset::Dataset;

/// Whole-document storage: every call reads or writes the full [`Dataset`].
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Read and parse the persisted document.
    async fn load(&self) -> Result<Dataset, StoreError>;

    /// Replace the persisted document with `dataset`.
    async fn save(&self, dataset: &Dataset) -> Result<(), StoreError>;
}
