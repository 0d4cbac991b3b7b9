use axum::extract::{Form, Path, State};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use webshelf_storage::UpdateOutcome;

use crate::api_error::ApiError;
use crate::query_types::{BookForm, parse_book_id};
use crate::templates::{added_card, book_card, edit_form as render_edit_form};
use crate::{AppState, HISTORY_CHANGED_EVENT, REFRESH_HEADER};

/// Header pair telling the page to re-fetch the history panel.
fn refresh_signal() -> [(axum::http::HeaderName, HeaderValue); 1] {
    [(REFRESH_HEADER, HeaderValue::from_static(HISTORY_CHANGED_EVENT))]
}

/// `POST /book/`: insert and return the new card, highlighted.
pub async fn add_book(
    State(state): State<AppState>,
    Form(form): Form<BookForm>,
) -> Result<Response, ApiError> {
    let fields = form.into_fields()?;
    let book = state.books.insert_book(&fields).await?;
    Ok((refresh_signal(), Html(added_card(&book))).into_response())
}

/// `GET /book/{id}/`: the plain card, used to cancel an edit.
pub async fn show_book(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let book = state.books.get_book(parse_book_id(&raw_id)?).await?;
    Ok(Html(book_card(&book, book.color())))
}

/// `GET /book/{id}/edit`: edit form pre-filled with the stored values.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let book = state.books.get_book(parse_book_id(&raw_id)?).await?;
    Ok(Html(render_edit_form(&book)))
}

/// `PATCH /book/{id}/`: apply the edit, then send the client back to `/`.
pub async fn update_book(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Form(form): Form<BookForm>,
) -> Result<Response, ApiError> {
    let id = parse_book_id(&raw_id)?;
    let fields = form.into_fields()?;
    match state.books.update_book(id, &fields).await? {
        UpdateOutcome::Updated(_) => {},
        UpdateOutcome::Unchanged => tracing::debug!(book_id = %id, "no changes submitted"),
    }
    Ok((refresh_signal(), Redirect::to("/")).into_response())
}

/// `DELETE /book/{id}/`: empty body so htmx removes the card.
pub async fn delete_book(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_book_id(&raw_id)?;
    state.books.delete_book(id).await?;
    Ok((StatusCode::OK, refresh_signal()).into_response())
}
