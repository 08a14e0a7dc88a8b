//! # Bookshelf Backend Library
//!
//! A small HTTP service that keeps a collection of book records in a single
//! JSON file and exposes create/read/update/delete plus substring search.
//!
//! ## Architecture
//!
//! - **Axum**: HTTP server and routing
//! - **Tokio**: async runtime; one task per request, blocking pool for search workers
//! - **Serde**: JSON for both the backing file and the API
//!
//! Every request reloads the whole collection from the store, and every
//! mutation writes the whole collection back. There is no cache or index.
//!
//! ## Core Components
//!
//! - [`config`]: layered configuration (embedded defaults, file, environment)
//! - [`error`]: storage/search errors and the HTTP error response
//! - [`store`]: the load/save capability and its file and in-memory implementations
//! - [`books`]: list/get/create/update/delete on top of a store
//! - [`search`]: chunked parallel substring search
//! - [`routes`]: HTTP handlers and the router
//! - [`metrics`]: request counters
//! - [`state`]: shared application state
//! - [`types`]: the `Book` record and query DTOs

pub mod books;
pub mod config;
pub mod error;
pub mod metrics;
pub mod routes;
pub mod search;
pub mod state;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
