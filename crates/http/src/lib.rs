//! HTTP server for webshelf.
//!
//! Server-rendered HTML with htmx fragments. Handlers talk to storage only
//! through the async store traits held in [`AppState`].

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod handlers;
mod query_types;
pub mod templates;

use axum::{Router, http::HeaderName, routing::get};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use webshelf_storage::{BookStore, HistoryStore, Storage};

/// htmx response header carrying the refresh signal.
pub const REFRESH_HEADER: HeaderName = HeaderName::from_static("hx-trigger");

/// Event name the history panel re-fetches itself on.
pub const HISTORY_CHANGED_EVENT: &str = "history-changed";

/// Shared application state for all HTTP handlers.
///
/// Built once at startup around the storage handle and cloned into each
/// request by axum.
#[derive(Clone)]
pub struct AppState {
    pub books: Arc<dyn BookStore>,
    pub history: Arc<dyn HistoryStore>,
}

impl AppState {
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        let storage = Arc::new(storage);
        Self { books: storage.clone(), history: storage }
    }
}

/// Build the router. Files under `static_dir` are served at `/static/`.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(handlers::index::index))
        .route("/health", get(health))
        .route("/search/", get(handlers::search::search))
        .route("/updates/", get(handlers::updates::recent))
        .route("/updates/full", get(handlers::updates::full))
        .route("/book/", axum::routing::post(handlers::books::add_book))
        .route(
            "/book/{id}/",
            get(handlers::books::show_book)
                .patch(handlers::books::update_book)
                .delete(handlers::books::delete_book),
        )
        .route("/book/{id}/edit", get(handlers::books::edit_form))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
