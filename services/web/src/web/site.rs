//! services/web/src/web/site.rs
//!
//! The public pages.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use minijinja::context;
use std::sync::Arc;
use tracing::error;

use crate::web::state::AppState;
use crate::web::views::BookView;

pub const WELCOME_MESSAGE: &str = "Bienvenid@";

/// Sender label used by the public chat page.
pub const SITE_SENDER: &str = "sitio";

/// GET /
pub async fn index(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .views
        .render("sitio/index.html", context! { welcome_message => WELCOME_MESSAGE })
}

/// GET /libros
pub async fn books(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let books = state.catalog.list().await.map_err(|e| {
        error!("Failed to list books: {:?}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error al cargar los libros.".to_string(),
        )
    })?;
    let libros: Vec<BookView> = books.into_iter().map(BookView::from).collect();
    state.views.render("sitio/libros.html", context! { libros => libros })
}

/// GET /nosotros
pub async fn about(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state.views.render("sitio/nosotros.html", context! {})
}

/// GET /chat
pub async fn chat(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .views
        .render("sitio/chat.html", context! { remitente => SITE_SENDER })
}
