//! services/web/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use crate::error::ApiError;
use crate::web::session::SessionKeys;
use crate::web::views::Views;
use sitio_core::ports::{BookRepository, ImageStore, MessageRepository};
use sitio_core::{BookCatalog, ChatRoom};
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
///
/// Nothing in here is mutable: the session flag lives in each browser's cookie.
#[derive(Clone)]
pub struct AppState {
    pub catalog: BookCatalog,
    pub chat: ChatRoom,
    pub config: Arc<Config>,
    pub views: Arc<Views>,
    pub session_keys: SessionKeys,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        books: Arc<dyn BookRepository>,
        messages: Arc<dyn MessageRepository>,
        images: Arc<dyn ImageStore>,
    ) -> Result<Self, ApiError> {
        let session_keys = SessionKeys::new(&config.session_secret, config.cookie_secure)?;
        Ok(Self {
            catalog: BookCatalog::new(books, images),
            chat: ChatRoom::new(messages),
            views: Arc::new(Views::new()?),
            config,
            session_keys,
        })
    }
}
