//! JSON document store.
//!
//! # Storage Format
//!
//! All state lives in one pretty-printed JSON file:
//!
//! ```text
//! {
//!   "customers": [ { "id": ..., "bmiHistory": [...], "notes": [...] } ]
//! }
//! ```
//!
//! Every mutation is a full read-modify-write of that file. Access is
//! serialized through a single async mutex, so overlapping requests never
//! interleave their read and write halves. Writes go to a sibling temp file
//! which is then renamed over the target, so readers never observe a partial
//! document.

use std::path::PathBuf;

use thiserror::Error;
use tokio::sync::Mutex;

use nutrition_tracker_core::Document;

/// Errors raised by [`DocumentStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading, writing or renaming the backing file failed.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a valid document.
    #[error("document at {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory document could not be serialized.
    #[error("failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// File-backed store holding the whole [`Document`].
#[derive(Debug)]
pub struct DocumentStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl DocumentStore {
    /// Open the store at `path`, creating an empty document if the file is
    /// absent.
    ///
    /// The existing document is parsed once so a corrupt file is reported at
    /// startup rather than on the first request.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be created or read, and
    /// `StoreError::Corrupt` if its content is not a valid document.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self {
            path: path.into(),
            lock: Mutex::new(()),
        };

        let doc = store.read_all().await?;
        tracing::info!(
            path = %store.path.display(),
            customers = doc.customers.len(),
            "Document store opened"
        );

        Ok(store)
    }

    /// Write `{"customers": []}` if the backing file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be checked or created.
    pub async fn ensure_initialized(&self) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        self.init_locked().await
    }

    /// Read and parse the full document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` on read failure and `StoreError::Corrupt` on
    /// malformed content.
    pub async fn read_all(&self) -> Result<Document, StoreError> {
        let _guard = self.lock.lock().await;
        self.load_locked().await
    }

    /// Replace the full document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Serialize` or `StoreError::Io` if the document
    /// cannot be written.
    pub async fn write_all(&self, doc: &Document) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        self.persist_locked(doc).await
    }

    /// Run one read-modify-write cycle under the store lock.
    ///
    /// The document is only written back if `apply` returns `Ok`, so a
    /// rejected mutation leaves the file untouched.
    ///
    /// # Errors
    ///
    /// Returns whatever `apply` returns, or a converted [`StoreError`] if the
    /// document cannot be loaded or persisted.
    pub async fn update<T, E, F>(&self, apply: F) -> Result<T, E>
    where
        F: FnOnce(&mut Document) -> Result<T, E>,
        E: From<StoreError>,
    {
        let _guard = self.lock.lock().await;
        let mut doc = self.load_locked().await?;
        let output = apply(&mut doc)?;
        self.persist_locked(&doc).await?;
        Ok(output)
    }

    async fn init_locked(&self) -> Result<(), StoreError> {
        let exists = tokio::fs::try_exists(&self.path)
            .await
            .map_err(|source| self.io_error(source))?;
        if exists {
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| self.io_error(source))?;
        }

        tracing::info!(path = %self.path.display(), "Creating empty document");
        self.persist_locked(&Document::default()).await
    }

    async fn load_locked(&self) -> Result<Document, StoreError> {
        self.init_locked().await?;

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| self.io_error(source))?;

        serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    async fn persist_locked(&self, doc: &Document) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(doc).map_err(StoreError::Serialize)?;
        let tmp = self.temp_path();

        tokio::fs::write(&tmp, body)
            .await
            .map_err(|source| self.io_error(source))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|source| self.io_error(source))?;

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
