//! Persistence of the book collection.
//!
//! The service never holds records between requests: every operation calls
//! [`BookStore::load`], works on the returned vector and, for mutations, hands
//! the whole collection back to [`BookStore::save`].
//!
//! - [`JsonFileStore`]: the production store, a single pretty-printed JSON file
//! - [`MemoryStore`]: an in-process store for tests and benchmarks

use async_trait::async_trait;

use crate::error::StoreError;
use crate::types::Book;

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Load/save capability over the full collection.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Returns the persisted collection, or an empty one if nothing usable is stored.
    async fn load(&self) -> Vec<Book>;

    /// Replaces the persisted collection with `books`.
    async fn save(&self, books: &[Book]) -> Result<(), StoreError>;
}
