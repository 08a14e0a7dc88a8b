use std::ops::Range;
use std::sync::Arc;

use tracing::debug;

use super::pool::WorkerPool;
use crate::error::SearchError;
use crate::types::Book;

/// Splits `len` items into `workers` contiguous ranges of `ceil(len / workers)`
/// items each. The last non-empty range takes the remainder; when there are
/// more workers than items the trailing ranges are empty.
pub fn chunk_ranges(len: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let chunk = len.div_ceil(workers);
    (0..workers)
        .map(|i| {
            let start = (i * chunk).min(len);
            let end = (start + chunk).min(len);
            start..end
        })
        .collect()
}

/// Case-insensitive substring match on title or description.
/// `needle` must already be lowercased.
pub fn matches(book: &Book, needle: &str) -> bool {
    book.title.to_lowercase().contains(needle) || book.description.to_lowercase().contains(needle)
}

#[derive(Debug, Clone)]
pub struct SearchEngine {
    workers: usize,
}

impl SearchEngine {
    pub fn new(workers: usize) -> Self {
        Self { workers: workers.max(1) }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Scans `books` in parallel chunks and returns the matches in collection order.
    pub async fn search(&self, books: Vec<Book>, query: &str) -> Result<Vec<Book>, SearchError> {
        let needle = query.to_lowercase();
        let books = Arc::new(books);
        let ranges = chunk_ranges(books.len(), self.workers);

        let mut pool = WorkerPool::new(ranges.len());
        for (index, range) in ranges.into_iter().enumerate() {
            let books = Arc::clone(&books);
            let needle = needle.clone();
            pool.submit(index, move || {
                books[range].iter().filter(|b| matches(b, &needle)).cloned().collect::<Vec<_>>()
            });
        }

        let batches = pool.join().await?;
        let results: Vec<Book> = batches.into_iter().flatten().collect();
        debug!(query = %query, total = books.len(), hits = results.len(), workers = self.workers, "search done");
        Ok(results)
    }
}
