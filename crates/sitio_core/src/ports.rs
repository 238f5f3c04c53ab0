//! crates/sitio_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the site's core logic.
//! The web service provides the concrete SQLite and filesystem implementations.

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{Book, Message, NewBook, NewMessage};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., database, filesystem).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Invalid input: {0}")]
    Invalid(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Returns every book; no ordering is promised.
    async fn list_books(&self) -> PortResult<Vec<Book>>;

    async fn get_book(&self, id: i64) -> PortResult<Option<Book>>;

    /// Inserts a row and returns it with its freshly assigned id.
    async fn create_book(&self, book: NewBook) -> PortResult<Book>;

    /// Removes the row. Returns `false` when no row had that id.
    async fn delete_book(&self, id: i64) -> PortResult<bool>;
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Returns every message, oldest first.
    async fn list_messages(&self) -> PortResult<Vec<Message>>;

    /// Inserts a message stamped with the current server time.
    async fn create_message(&self, message: NewMessage) -> PortResult<Message>;
}

#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Writes `data` under `key`, replacing anything already stored there.
    async fn store(&self, key: &str, data: Bytes) -> PortResult<()>;

    /// Removes the file under `key`. A missing file is not an error.
    async fn remove(&self, key: &str) -> PortResult<()>;
}
