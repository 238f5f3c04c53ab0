//! services/web/src/web/views.rs
//!
//! HTML rendering. Templates are compiled into the binary and rendered with MiniJinja.

use axum::{http::StatusCode, response::Html};
use minijinja::Environment;
use serde::Serialize;
use sitio_core::domain::Book;
use tracing::error;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    ("chat_widget.html", include_str!("../../templates/chat_widget.html")),
    ("sitio/index.html", include_str!("../../templates/sitio/index.html")),
    ("sitio/libros.html", include_str!("../../templates/sitio/libros.html")),
    ("sitio/nosotros.html", include_str!("../../templates/sitio/nosotros.html")),
    ("sitio/chat.html", include_str!("../../templates/sitio/chat.html")),
    ("admin/base.html", include_str!("../../templates/admin/base.html")),
    ("admin/login.html", include_str!("../../templates/admin/login.html")),
    ("admin/index.html", include_str!("../../templates/admin/index.html")),
    ("admin/libros.html", include_str!("../../templates/admin/libros.html")),
    ("admin/chat.html", include_str!("../../templates/admin/chat.html")),
    ("admin/trabajos.html", include_str!("../../templates/admin/trabajos.html")),
    ("admin/videos.html", include_str!("../../templates/admin/videos.html")),
];

/// The compiled template set shared by every handler.
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    /// Parses every template up front so a broken one fails startup, not a request.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(
        &self,
        name: &str,
        ctx: S,
    ) -> Result<Html<String>, (StatusCode, String)> {
        self.env
            .get_template(name)
            .and_then(|t| t.render(ctx))
            .map(Html)
            .map_err(|e| {
                error!("Failed to render template {}: {:?}", name, e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor.".to_string(),
                )
            })
    }
}

/// What the book templates need to know about a book.
#[derive(Serialize)]
pub struct BookView {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub image_url: Option<String>,
}

impl From<Book> for BookView {
    fn from(book: Book) -> Self {
        let image_url = (!book.image.is_empty()).then(|| format!("/static/images/{}", book.image));
        Self {
            id: book.id,
            name: book.name,
            url: book.url,
            image_url,
        }
    }
}
