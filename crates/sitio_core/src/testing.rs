//! In-memory fakes of the ports, used by the unit tests of this crate.

use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;

use crate::domain::{Book, Message, NewBook, NewMessage};
use crate::ports::{BookRepository, ImageStore, MessageRepository, PortError, PortResult};

#[derive(Default)]
pub struct MemoryBooks {
    rows: Mutex<BTreeMap<i64, Book>>,
    next_id: AtomicI64,
    fail_writes: AtomicBool,
}

impl MemoryBooks {
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl BookRepository for MemoryBooks {
    async fn list_books(&self) -> PortResult<Vec<Book>> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn get_book(&self, id: i64) -> PortResult<Option<Book>> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn create_book(&self, book: NewBook) -> PortResult<Book> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PortError::Unexpected("disk full".to_string()));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let book = Book {
            id,
            name: book.name,
            url: book.url,
            image: book.image,
        };
        self.rows.lock().unwrap().insert(id, book.clone());
        Ok(book)
    }

    async fn delete_book(&self, id: i64) -> PortResult<bool> {
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }
}

#[derive(Default)]
pub struct MemoryMessages {
    rows: Mutex<Vec<Message>>,
}

#[async_trait]
impl MessageRepository for MemoryMessages {
    async fn list_messages(&self) -> PortResult<Vec<Message>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn create_message(&self, message: NewMessage) -> PortResult<Message> {
        let mut rows = self.rows.lock().unwrap();
        let message = Message {
            id: rows.len() as i64 + 1,
            sender: message.sender,
            body: message.body,
            created_at: Utc::now(),
        };
        rows.push(message.clone());
        Ok(message)
    }
}

#[derive(Default)]
pub struct MemoryImages {
    keys: Mutex<HashSet<String>>,
}

impl MemoryImages {
    pub fn keys(&self) -> HashSet<String> {
        self.keys.lock().unwrap().clone()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.lock().unwrap().contains(key)
    }
}

#[async_trait]
impl ImageStore for MemoryImages {
    async fn store(&self, key: &str, _data: Bytes) -> PortResult<()> {
        self.keys.lock().unwrap().insert(key.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> PortResult<()> {
        self.keys.lock().unwrap().remove(key);
        Ok(())
    }
}
