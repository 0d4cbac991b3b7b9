use axum::extract::{Query, State};
use axum::response::Html;
use webshelf_storage::BookListQuery;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::SearchQuery;
use crate::templates::book_list;

/// Book-list fragment of every book whose name contains `q`, ignoring case.
/// An empty `q` matches all books.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Html<String>, ApiError> {
    let books = state.books.list_books(&BookListQuery::search(query.q.as_str())).await?;
    tracing::debug!(q = %query.q, hits = books.len(), "search");
    Ok(Html(book_list(&books)))
}
