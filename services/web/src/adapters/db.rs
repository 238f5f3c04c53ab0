//! services/web/src/adapters/db.rs
//!
//! This module contains the database adapter, the concrete implementation of the
//! `BookRepository` and `MessageRepository` ports from the core crate. It handles
//! all interactions with the SQLite database using `sqlx`.

use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sitio_core::domain::{Book, Message, NewBook, NewMessage};
use sitio_core::ports::{BookRepository, MessageRepository, PortError, PortResult};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{FromRow, SqlitePool};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A database adapter that implements the repository ports.
#[derive(Clone)]
pub struct DbAdapter {
    pool: SqlitePool,
}

impl DbAdapter {
    /// Creates a new `DbAdapter`.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a pool for `database_url`, creating the parent directory of a file
    /// database first.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
        if let Some(parent) = database_file(database_url).and_then(|p| p.parent()) {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
    }

    /// A helper function to run database migrations at startup.
    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

/// Extracts the file path from a `sqlite:` URL; `None` for in-memory databases.
fn database_file(database_url: &str) -> Option<&Path> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(Path::new(path))
}

//=========================================================================================
// "Impure" Database Record Structs
//=========================================================================================

#[derive(FromRow)]
struct BookRecord {
    id: i64,
    name: String,
    url: String,
    image: String,
}
impl BookRecord {
    fn to_domain(self) -> Book {
        Book {
            id: self.id,
            name: self.name,
            url: self.url,
            image: self.image,
        }
    }
}

#[derive(FromRow)]
struct MessageRecord {
    id: i64,
    sender: String,
    body: String,
    created_at: DateTime<Utc>,
}
impl MessageRecord {
    fn to_domain(self) -> Message {
        Message {
            id: self.id,
            sender: self.sender,
            body: self.body,
            created_at: self.created_at,
        }
    }
}

//=========================================================================================
// Port Implementations
//=========================================================================================

#[async_trait]
impl BookRepository for DbAdapter {
    async fn list_books(&self) -> PortResult<Vec<Book>> {
        let records = sqlx::query_as::<_, BookRecord>("SELECT id, name, url, image FROM books")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        let books = records.into_iter().map(|r| r.to_domain()).collect();
        Ok(books)
    }

    async fn get_book(&self, id: i64) -> PortResult<Option<Book>> {
        let record = sqlx::query_as::<_, BookRecord>(
            "SELECT id, name, url, image FROM books WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PortError::Unexpected(e.to_string()))?;
        Ok(record.map(BookRecord::to_domain))
    }

    async fn create_book(&self, book: NewBook) -> PortResult<Book> {
        let record = sqlx::query_as::<_, BookRecord>(
            "INSERT INTO books (name, url, image) VALUES (?1, ?2, ?3) RETURNING id, name, url, image",
        )
        .bind(book.name)
        .bind(book.url)
        .bind(book.image)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| PortError::Unexpected(e.to_string()))?;
        Ok(record.to_domain())
    }

    async fn delete_book(&self, id: i64) -> PortResult<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl MessageRepository for DbAdapter {
    async fn list_messages(&self) -> PortResult<Vec<Message>> {
        let records = sqlx::query_as::<_, MessageRecord>(
            "SELECT id, sender, body, created_at FROM messages ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PortError::Unexpected(e.to_string()))?;

        let messages = records.into_iter().map(|r| r.to_domain()).collect();
        Ok(messages)
    }

    async fn create_message(&self, message: NewMessage) -> PortResult<Message> {
        let record = sqlx::query_as::<_, MessageRecord>(
            "INSERT INTO messages (sender, body, created_at) VALUES (?1, ?2, ?3) RETURNING id, sender, body, created_at",
        )
        .bind(message.sender)
        .bind(message.body)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| PortError::Unexpected(e.to_string()))?;
        Ok(record.to_domain())
    }
}
