use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::Book;
use crate::store::Store;

/// Unbounded in-memory store that lives as long as the process.
#[derive(Default)]
pub struct MemoryStore {
    books: Mutex<HashMap<String, Arc<Book>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn books(&self) -> MutexGuard<'_, HashMap<String, Arc<Book>>> {
        // A poisoned map is still a valid map
        self.books.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Store for MemoryStore {
    fn get(&self, book_id: &str) -> Option<Arc<Book>> {
        self.books().get(book_id).cloned()
    }

    fn put(&self, book_id: &str, book: Book) -> Arc<Book> {
        let book = Arc::new(book);
        self.books().insert(book_id.to_string(), book.clone());
        book
    }

    fn evict(&self, book_id: &str) -> bool {
        self.books().remove(book_id).is_some()
    }

    fn contains(&self, book_id: &str) -> bool {
        self.books().contains_key(book_id)
    }
}
