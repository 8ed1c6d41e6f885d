pub mod memory;

use std::sync::Arc;

use crate::domain::Book;

pub use memory::MemoryStore;

/// Session cache of loaded books, keyed by book identifier.
pub trait Store {
    fn get(&self, book_id: &str) -> Option<Arc<Book>>;
    /// Insert or replace the entry for `book_id`.
    fn put(&self, book_id: &str, book: Book) -> Arc<Book>;
    /// Remove the entry; returns whether one existed.
    fn evict(&self, book_id: &str) -> bool;
    fn contains(&self, book_id: &str) -> bool;
}
