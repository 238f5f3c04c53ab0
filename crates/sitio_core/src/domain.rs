//! crates/sitio_core/src/domain.rs
//!
//! Defines the pure, core data structures for the site.
//! These structs are independent of any database or serialization format.

use bytes::Bytes;
use chrono::{DateTime, Utc};

/// A book in the public catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub name: String,
    pub url: String,
    /// Key of the cover image in the image store; empty when no cover was uploaded.
    pub image: String,
}

/// The fields of a book that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub name: String,
    pub url: String,
    pub image: String,
}

/// A cover image as received from the admin form.
#[derive(Debug, Clone)]
pub struct Upload {
    /// The file name the browser reported. Only its extension is kept.
    pub original_name: String,
    pub data: Bytes,
}

/// A single chat line. Every viewer sees every message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: i64,
    pub sender: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub sender: String,
    pub body: String,
}

// Schema only: no route reads or writes documents yet.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: i64,
    pub name: String,
    pub file_path: String,
    pub uploaded_at: DateTime<Utc>,
}
