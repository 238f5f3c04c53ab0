//! crates/sitio_core/src/catalog.rs
//!
//! Book management on top of the `BookRepository` and `ImageStore` ports.

use std::sync::Arc;

use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::domain::{Book, NewBook, Upload};
use crate::ports::{BookRepository, ImageStore, PortError, PortResult};

/// Lists, creates and deletes books, keeping cover images in step with the rows.
#[derive(Clone)]
pub struct BookCatalog {
    books: Arc<dyn BookRepository>,
    images: Arc<dyn ImageStore>,
}

impl BookCatalog {
    pub fn new(books: Arc<dyn BookRepository>, images: Arc<dyn ImageStore>) -> Self {
        Self { books, images }
    }

    pub async fn list(&self) -> PortResult<Vec<Book>> {
        self.books.list_books().await
    }

    /// Saves a new book and its optional cover.
    ///
    /// The cover is written under a generated key before the row is inserted, so a
    /// stored row never points at a file that failed to save. If the insert fails
    /// the orphaned file is removed again.
    pub async fn save(&self, name: &str, url: &str, upload: Option<Upload>) -> PortResult<Book> {
        let name = name.trim();
        let url = url.trim();
        if name.is_empty() || url.is_empty() {
            return Err(PortError::Invalid("name and url are required".to_string()));
        }

        let upload = upload.filter(|u| !u.original_name.is_empty() && !u.data.is_empty());
        let image = match upload {
            Some(upload) => {
                let key = image_key(&upload.original_name);
                self.images.store(&key, upload.data).await?;
                key
            }
            None => String::new(),
        };

        let new_book = NewBook {
            name: name.to_string(),
            url: url.to_string(),
            image: image.clone(),
        };

        match self.books.create_book(new_book).await {
            Ok(book) => {
                info!(book_id = book.id, image = %book.image, "Book saved");
                Ok(book)
            }
            Err(e) => {
                if !image.is_empty() {
                    if let Err(cleanup) = self.images.remove(&image).await {
                        warn!("Failed to remove orphaned image {}: {:?}", image, cleanup);
                    }
                }
                Err(e)
            }
        }
    }

    /// Deletes a book and, best effort, its cover.
    ///
    /// Returns `Ok(false)` when no book had that id; nothing is changed in that case.
    pub async fn delete(&self, id: i64) -> PortResult<bool> {
        let Some(book) = self.books.get_book(id).await? else {
            debug!(book_id = id, "Delete requested for a book that does not exist");
            return Ok(false);
        };

        let removed = self.books.delete_book(id).await?;

        if !book.image.is_empty() {
            if let Err(e) = self.images.remove(&book.image).await {
                error!("Failed to remove image {} of book {}: {:?}", book.image, id, e);
            }
        }

        info!(book_id = id, "Book deleted");
        Ok(removed)
    }
}

/// Builds a collision-free storage key, keeping a sanitised extension of the
/// uploaded name so the file is still served with a sensible content type.
pub fn image_key(original_name: &str) -> String {
    let extension = original_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| {
            !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric())
        })
        .map(|ext| ext.to_ascii_lowercase());

    match extension {
        Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
        None => Uuid::new_v4().to_string(),
    }
}
