use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};
use tracing::debug;

use crate::error::StoreError;
use crate::store::BookStore;
use crate::types::Book;

/// CRUD operations over a [`BookStore`].
///
/// Every call reloads the collection. Lookups by id take the first record whose
/// `book_id` matches, so duplicates after the first are only reachable through
/// the list and search operations.
#[derive(Clone)]
pub struct BookService {
    store: Arc<dyn BookStore>,
    write_guard: Option<Arc<Mutex<()>>>,
}

impl BookService {
    /// `serialize_writes` holds a lock across load+mutate+save so that
    /// concurrent mutations cannot overwrite each other's changes.
    pub fn new(store: Arc<dyn BookStore>, serialize_writes: bool) -> Self {
        Self {
            store,
            write_guard: serialize_writes.then(|| Arc::new(Mutex::new(()))),
        }
    }

    async fn lock_writes(&self) -> Option<MutexGuard<'_, ()>> {
        match &self.write_guard {
            Some(guard) => Some(guard.lock().await),
            None => None,
        }
    }

    pub async fn list(&self) -> Vec<Book> {
        self.store.load().await
    }

    pub async fn get(&self, id: &str) -> Option<Book> {
        self.store.load().await.into_iter().find(|b| b.book_id == id)
    }

    /// Appends `book` without checking for an existing `book_id`.
    pub async fn create(&self, book: Book) -> Result<Book, StoreError> {
        let _guard = self.lock_writes().await;
        let mut books = self.store.load().await;
        books.push(book.clone());
        self.store.save(&books).await?;
        debug!(book_id = %book.book_id, total = books.len(), "book created");
        Ok(book)
    }

    /// Replaces the first record matching `id` with `book` as given.
    ///
    /// The path id is not copied into the replacement, so a differing
    /// `book.book_id` effectively renames the record.
    pub async fn update(&self, id: &str, book: Book) -> Result<Option<Book>, StoreError> {
        let _guard = self.lock_writes().await;
        let mut books = self.store.load().await;
        let Some(slot) = books.iter_mut().find(|b| b.book_id == id) else {
            return Ok(None);
        };
        *slot = book.clone();
        self.store.save(&books).await?;
        debug!(book_id = %id, "book updated");
        Ok(Some(book))
    }

    /// Removes the first record matching `id`. Returns `false` if none matched,
    /// in which case the store is left untouched.
    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let _guard = self.lock_writes().await;
        let mut books = self.store.load().await;
        let Some(pos) = books.iter().position(|b| b.book_id == id) else {
            return Ok(false);
        };
        books.remove(pos);
        self.store.save(&books).await?;
        debug!(book_id = %id, remaining = books.len(), "book deleted");
        Ok(true)
    }
}
