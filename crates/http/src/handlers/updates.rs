use axum::extract::State;
use axum::response::Html;
use webshelf_core::RECENT_HISTORY_LIMIT;

use crate::AppState;
use crate::api_error::ApiError;
use crate::templates::{full_history, recent_history};

pub async fn recent(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let entries = state.history.list_history(Some(RECENT_HISTORY_LIMIT)).await?;
    Ok(Html(recent_history(&entries)))
}

pub async fn full(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let entries = state.history.list_history(None).await?;
    Ok(Html(full_history(&entries)))
}
