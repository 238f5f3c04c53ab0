pub mod catalog;
pub mod chat;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod testing;

pub use catalog::BookCatalog;
pub use chat::ChatRoom;
pub use domain::{Book, Document, Message, NewBook, NewMessage, Upload};
pub use ports::{BookRepository, ImageStore, MessageRepository, PortError, PortResult};
