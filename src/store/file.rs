use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, warn};

use super::BookStore;
use crate::error::StoreError;
use crate::types::Book;

/// Stores the collection as a JSON array in a single file.
///
/// Each save overwrites the file in place. The write is not atomic, so a crash
/// mid-write can leave a truncated file, which the next load reads as empty.
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
}

#[async_trait]
impl BookStore for JsonFileStore {
    async fn load(&self) -> Vec<Book> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "backing file missing, starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), "failed to read backing file: {}", e);
                return Vec::new();
            }
        };

        // `null` decodes to None and is treated like an empty array
        match serde_json::from_slice::<Option<Vec<Book>>>(&raw) {
            Ok(books) => books.unwrap_or_default(),
            Err(e) => {
                warn!(path = %self.path.display(), "backing file is not a valid book array: {}", e);
                Vec::new()
            }
        }
    }

    async fn save(&self, books: &[Book]) -> Result<(), StoreError> {
        let encoded = serde_json::to_vec_pretty(books)?;
        tokio::fs::write(&self.path, encoded).await?;
        debug!(path = %self.path.display(), count = books.len(), "books written");
        Ok(())
    }
}
