//! Unit and integration tests for the Bookshelf service.
//!
//! ## Test Modules
//!
//! - **store_tests**: JSON file and in-memory stores
//! - **books_tests**: book operations on top of a store
//! - **search_tests**: chunking, worker pool and search ordering
//! - **api_tests**: HTTP endpoints driven through the router
//! - **config_tests**: configuration defaults, layering and validation
//! - **error_tests**: error display and HTTP error responses
//!
//! Individual test modules can be run with:
//! ```bash
//! cargo test api_tests
//! ```

pub mod books_tests;
pub mod search_tests;

use crate::types::Book;

/// A book with the given id, title and description and every other field zeroed.
pub(crate) fn book(id: &str, title: &str, description: &str) -> Book {
    Book {
        book_id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        ..Book::default()
    }
}
