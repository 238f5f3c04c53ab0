//! services/web/src/web/admin.rs
//!
//! The admin area. Every route here sits behind `require_admin`.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
};
use minijinja::context;
use sitio_core::domain::Upload;
use sitio_core::ports::PortError;
use std::sync::Arc;
use tracing::{error, warn};

use crate::web::state::AppState;
use crate::web::views::BookView;

/// Sender label used by the admin chat page.
pub const ADMIN_SENDER: &str = "admin";

const BOOKS_PATH: &str = "/admin/libros";

/// GET /admin/
pub async fn index(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state.views.render("admin/index.html", context! {})
}

/// GET /admin/libros
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
    state.views.render("admin/libros.html", context! { libros => libros })
}

/// POST /admin/libros/guardar
///
/// Accepts the multipart book form: `txtNombre`, `txtURL` and an optional `txtImagen` file.
pub async fn save_book(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let bad_form = |e: axum::extract::multipart::MultipartError| {
        warn!("Failed to read book form: {}", e);
        match e.status() {
            StatusCode::PAYLOAD_TOO_LARGE => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "El archivo es demasiado grande.".to_string(),
            ),
            status => (status, "Formulario inválido.".to_string()),
        }
    };

    let mut name = String::new();
    let mut url = String::new();
    let mut upload = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_form)? {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "txtNombre" => name = field.text().await.map_err(bad_form)?,
            "txtURL" => url = field.text().await.map_err(bad_form)?,
            "txtImagen" => {
                let original_name = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(bad_form)?;
                upload = Some(Upload {
                    original_name,
                    data,
                });
            }
            _ => {}
        }
    }

    match state.catalog.save(&name, &url, upload).await {
        Ok(_) => Ok(Redirect::to(BOOKS_PATH)),
        Err(PortError::Invalid(reason)) => {
            warn!("Rejected book form: {}", reason);
            Err((StatusCode::BAD_REQUEST, "Faltan datos.".to_string()))
        }
        Err(e) => {
            error!("Failed to save book: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error al guardar los datos.".to_string(),
            ))
        }
    }
}

/// POST /admin/libros/eliminar/{id}
///
/// Deleting an id that does not exist redirects just like a successful delete.
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state.catalog.delete(id).await.map_err(|e| {
        error!("Failed to delete book {}: {:?}", id, e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error al eliminar el libro.".to_string(),
        )
    })?;
    Ok(Redirect::to(BOOKS_PATH))
}

/// GET /admin/chat
pub async fn chat(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .views
        .render("admin/chat.html", context! { remitente => ADMIN_SENDER })
}

/// GET /admin/trabajos
pub async fn jobs(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state.views.render("admin/trabajos.html", context! {})
}

/// GET /admin/videos
pub async fn videos(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state.views.render("admin/videos.html", context! {})
}
