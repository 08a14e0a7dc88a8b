//! HTTP route handlers for the Bookshelf API.
//!
//! - `books`: CRUD and search over the book collection
//! - `health`: liveness, metrics and version endpoints

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod books;
pub mod health;

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/metrics", get(health::metrics))
        .route("/version", get(health::version))
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/search", get(books::search_books))
        .route(
            "/books/{id}",
            get(books::get_book).put(books::update_book).delete(books::delete_book),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
