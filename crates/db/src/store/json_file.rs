use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::dataset::Dataset;
use crate::store::DataStore;

/// Stores the dataset as one pretty-printed JSON file.
///
/// Saves write a sibling `<name>.tmp` file and rename it over the target, so
/// a failed write leaves the previous document intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty dataset document (and its directory) if none exists.
    ///
    /// Returns `true` when a new document was written.
    pub async fn ensure_exists(&self) -> Result<bool, StoreError> {
        let exists = tokio::fs::try_exists(&self.path)
            .await
            .map_err(|source| self.io_error(source))?;
        if exists {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        self.save(&Dataset::default()).await?;
        tracing::info!(path = %self.path.display(), "Created empty dataset document");
        Ok(true)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("dataset"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl DataStore for JsonFileStore {
    async fn load(&self) -> Result<Dataset, StoreError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| self.io_error(source))?;

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    async fn save(&self, dataset: &Dataset) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(dataset).map_err(StoreError::Serialize)?;

        let tmp = self.temp_path();
        tokio::fs::write(&tmp, json).await.map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|source| self.io_error(source))?;

        tracing::debug!(
            path = %self.path.display(),
            companies = dataset.companies.len(),
            houses = dataset.houses.len(),
            employees = dataset.employees.len(),
            "Dataset saved"
        );
        Ok(())
    }
}
