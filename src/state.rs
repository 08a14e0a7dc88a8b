use std::sync::Arc;

use crate::books::BookService;
use crate::config::AppConfig;
use crate::metrics::Metrics;
use crate::search::SearchEngine;
use crate::store::{BookStore, JsonFileStore};

/// The shared application state.
///
/// Cloned into every request handler by Axum. Nothing in here caches book
/// records; the store is the only place they live.
#[derive(Clone)]
pub struct AppState {
    /// Book operations over the configured store.
    pub books: BookService,
    /// Parallel substring search.
    pub search: SearchEngine,
    /// The application configuration.
    pub config: Arc<AppConfig>,
    /// Request counters exposed on `/metrics`.
    pub metrics: Metrics,
}

impl AppState {
    /// Builds the state around an arbitrary store. Tests pass a
    /// [`crate::store::MemoryStore`] here.
    pub fn with_store(store: Arc<dyn BookStore>, config: AppConfig) -> Self {
        Self {
            books: BookService::new(store, config.storage.serialize_writes),
            search: SearchEngine::new(config.search.workers),
            config: Arc::new(config),
            metrics: Metrics::new(),
        }
    }

    /// Builds the state backed by the JSON file named in `config.storage.path`.
    pub fn new(config: AppConfig) -> Self {
        let store = Arc::new(JsonFileStore::new(&config.storage.path));
        Self::with_store(store, config)
    }
}
