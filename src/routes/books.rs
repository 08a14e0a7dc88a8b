use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::{debug, warn};

use crate::{
    error::{AppError, AppResult, OptionExt},
    state::AppState,
    types::Book,
};

/// Decodes a book from the first JSON value in a request body.
///
/// Anything after that value is ignored. Undecodable bodies become a
/// zero-valued book unless `api.strict_payloads` is set, in which case they
/// are rejected with 400.
pub fn decode_book(state: &AppState, body: &[u8]) -> AppResult<Book> {
    let decoded = match serde_json::Deserializer::from_slice(body).into_iter::<Book>().next() {
        Some(Ok(book)) => return Ok(book),
        Some(Err(e)) => e.to_string(),
        None => "empty body".to_string(),
    };
    if state.config.api.strict_payloads {
        return Err(AppError::BadRequest(format!("Invalid book payload: {}", decoded)));
    }
    warn!("Ignoring undecodable book payload: {}", decoded);
    Ok(Book::default())
}

/// Returns the first `q` value of the query string, or `""` when absent.
pub fn first_query_term(pairs: &[(String, String)]) -> &str {
    pairs.iter().find(|(k, _)| k == "q").map(|(_, v)| v.as_str()).unwrap_or("")
}

/// Maps a lookup result to the not-found path, counting misses.
fn found<T>(state: &AppState, id: &str, item: Option<T>) -> AppResult<T> {
    if item.is_none() {
        state.metrics.inc_not_found();
        debug!(book_id = %id, "no matching book");
    }
    item.ok_or_not_found(&format!("Book with ID {}", id))
}

/// An id segment that cannot be decoded (e.g. `%FF`) can never match a record.
fn book_id(state: &AppState, path: Result<Path<String>, PathRejection>) -> AppResult<String> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(e) => {
            debug!("undecodable book id: {}", e);
            found(state, "<invalid>", None)
        }
    }
}

pub async fn list_books(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.books.list().await)
}

pub async fn get_book(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Book>> {
    let id = book_id(&state, path)?;
    let book = found(&state, &id, state.books.get(&id).await)?;
    Ok(Json(book))
}

pub async fn create_book(State(state): State<AppState>, body: Bytes) -> AppResult<Json<Book>> {
    let book = decode_book(&state, &body)?;
    let created = state.books.create(book).await?;
    state.metrics.inc_created();
    Ok(Json(created))
}

pub async fn update_book(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> AppResult<Json<Book>> {
    let id = book_id(&state, path)?;
    let book = decode_book(&state, &body)?;
    let updated = found(&state, &id, state.books.update(&id, book).await?)?;
    state.metrics.inc_updated();
    Ok(Json(updated))
}

pub async fn delete_book(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = book_id(&state, path)?;
    let deleted = state.books.delete(&id).await?;
    found(&state, &id, deleted.then_some(()))?;
    state.metrics.inc_deleted();
    Ok((StatusCode::OK, format!("Book with ID {} deleted", id)))
}

pub async fn search_books(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.books.list().await;
    let results = state.search.search(books, first_query_term(&pairs)).await?;
    state.metrics.inc_searches();
    Ok(Json(results))
}
