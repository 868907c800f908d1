//! Dataset persistence and record repositories.
//!
//! [`Db`] is the handle the web layer holds. It owns the injected
//! [`DataStore`] plus the write lock that serializes load-modify-save
//! cycles, so concurrent mutations cannot overwrite each other.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;

pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

use error::StoreError;
use models::dataset::Dataset;
use store::{DataStore, JsonFileStore};

/// Shared, cheaply cloneable handle to the dataset store.
#[derive(Clone)]
pub struct Db {
    store: Arc<dyn DataStore>,
    write_lock: Arc<Mutex<()>>,
}

impl Db {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Read the current dataset without taking the write lock.
    pub async fn load(&self) -> Result<Dataset, StoreError> {
        self.store.load().await
    }

    /// Run one load-modify-save cycle under the write lock.
    ///
    /// The dataset is saved even when `apply` changes nothing.
    pub async fn mutate<T, F>(&self, apply: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Dataset) -> T + Send,
        T: Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut dataset = self.store.load().await?;
        let output = apply(&mut dataset);
        self.store.save(&dataset).await?;
        Ok(output)
    }
}

/// Open the JSON document at `path`, creating an empty one if it is missing.
pub async fn open_json_store(path: impl Into<PathBuf>) -> Result<Db, StoreError> {
    let store = JsonFileStore::new(path);
    store.ensure_exists().await?;
    Ok(Db::new(Arc::new(store)))
}

/// Verify the store is readable and parses.
pub async fn health_check(db: &Db) -> Result<(), StoreError> {
    db.load().await.map(|_| ())
}
