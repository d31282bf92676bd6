//! In-memory book store.
//!
//! An ordered collection of book records for the process lifetime. The tokio
//! runtime serves requests from multiple threads, so every read-modify-write
//! sequence (replace, remove) holds the lock across the find and the mutation
//! to avoid lost updates.

use std::sync::Mutex;

use crate::models::Book;

/// Ordered in-memory collection of book records
#[derive(Debug, Default)]
pub struct BookStore {
    books: Mutex<Vec<Book>>,
}

impl BookStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, preserving insertion order
    pub fn add(&self, book: Book) {
        self.books.lock().unwrap().push(book);
    }

    /// Snapshot of all records in insertion order
    pub fn list(&self) -> Vec<Book> {
        self.books.lock().unwrap().clone()
    }

    /// Look up a record by id
    pub fn get(&self, id: &str) -> Option<Book> {
        self.books
            .lock()
            .unwrap()
            .iter()
            .find(|book| book.id == id)
            .cloned()
    }

    /// Position of a record in insertion order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.books
            .lock()
            .unwrap()
            .iter()
            .position(|book| book.id == id)
    }

    /// Replace the record with the given id in place, keeping its position.
    /// Returns false when no record has that id.
    pub fn replace(&self, id: &str, book: Book) -> bool {
        let mut books = self.books.lock().unwrap();
        match books.iter().position(|b| b.id == id) {
            Some(index) => {
                books[index] = book;
                true
            }
            None => false,
        }
    }

    /// Remove the record with the given id. Returns false when absent.
    pub fn remove(&self, id: &str) -> bool {
        let mut books = self.books.lock().unwrap();
        match books.iter().position(|b| b.id == id) {
            Some(index) => {
                books.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.books.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.lock().unwrap().is_empty()
    }
}
