use axum::extract::{Query, State};
use axum::response::Html;
use webshelf_core::{PAGE_SIZE, RECENT_HISTORY_LIMIT};
use webshelf_storage::BookListQuery;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::PageQuery;
use crate::templates::{IndexView, index_page};

/// Full page: one page of books plus the recent activity panel.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, ApiError> {
    let page = query.page()?;
    let books = state.books.list_books(&BookListQuery::page(page)).await?;
    let total = state.books.count_books(None).await?;
    let history = state.history.list_history(Some(RECENT_HISTORY_LIMIT)).await?;

    let shown = page.offset(PAGE_SIZE) + books.len() as u64;
    Ok(Html(index_page(&IndexView {
        books: &books,
        history: &history,
        page,
        has_next: shown < total,
    })))
}
