//! Bookshelf management service.
//!
//! Validates payloads, assigns ids and timestamps, derives `finished`, and
//! applies the list filters. Validation order on create and update: missing
//! name first, then readPage against pageCount.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{book::coerce_bool, Book, BookPayload, BookQuery, BookSummary},
    repository::BookStore,
};

#[derive(Clone)]
pub struct ShelfService {
    store: Arc<BookStore>,
}

impl ShelfService {
    pub fn new(store: Arc<BookStore>) -> Self {
        Self { store }
    }

    /// Validate a payload and add a new book. Returns the generated id.
    pub fn create_book(&self, payload: BookPayload) -> AppResult<String> {
        let name = require_name(&payload, "Gagal menambahkan buku. Mohon isi nama buku")?;

        if payload.read_page > payload.page_count {
            return Err(AppError::Validation(
                "Gagal menambahkan buku. readPage tidak boleh lebih besar dari pageCount"
                    .to_string(),
            ));
        }

        let id = Uuid::new_v4().simple().to_string();
        let now = Utc::now();

        let book = Book {
            id: id.clone(),
            name,
            year: payload.year,
            author: payload.author,
            summary: payload.summary,
            publisher: payload.publisher,
            page_count: payload.page_count,
            read_page: payload.read_page,
            finished: payload.read_page == payload.page_count,
            reading: payload.reading.unwrap_or(false),
            inserted_at: now,
            updated_at: now,
        };

        self.store.add(book);
        tracing::info!("Book created id={}", id);

        Ok(id)
    }

    /// List books as summaries, applying at most one filter.
    /// Precedence: name > reading > finished; first non-empty parameter wins.
    pub fn list_books(&self, query: &BookQuery) -> Vec<BookSummary> {
        let books = self.store.list();

        let filtered: Vec<Book> = if let Some(pattern) = query.name_filter() {
            let pattern = pattern.to_lowercase();
            books
                .into_iter()
                .filter(|book| book.name.to_lowercase().contains(&pattern))
                .collect()
        } else if let Some(value) = query.reading_filter() {
            let wanted = coerce_bool(value);
            books
                .into_iter()
                .filter(|book| Some(book.reading) == wanted)
                .collect()
        } else if let Some(value) = query.finished_filter() {
            let wanted = coerce_bool(value);
            books
                .into_iter()
                .filter(|book| Some(book.finished) == wanted)
                .collect()
        } else {
            books
        };

        filtered.iter().map(Book::summary).collect()
    }

    /// Fetch the full record by id
    pub fn get_book(&self, id: &str) -> AppResult<Book> {
        self.store
            .get(id)
            .ok_or_else(|| AppError::NotFound("Buku tidak ditemukan".to_string()))
    }

    /// Validate a payload and replace the record in place. Preserves the id
    /// and the original insertedAt; refreshes updatedAt and finished.
    pub fn update_book(&self, id: &str, payload: BookPayload) -> AppResult<()> {
        let name = require_name(&payload, "Gagal memperbarui buku. Mohon isi nama buku")?;

        if payload.read_page > payload.page_count {
            return Err(AppError::Validation(
                "Gagal memperbarui buku. readPage tidak boleh lebih besar dari pageCount"
                    .to_string(),
            ));
        }

        let existing = self
            .store
            .get(id)
            .ok_or_else(|| AppError::NotFound("Gagal memperbarui buku. Id tidak ditemukan".to_string()))?;

        let book = Book {
            id: existing.id.clone(),
            name,
            year: payload.year,
            author: payload.author,
            summary: payload.summary,
            publisher: payload.publisher,
            page_count: payload.page_count,
            read_page: payload.read_page,
            finished: payload.read_page == payload.page_count,
            reading: payload.reading.unwrap_or(false),
            inserted_at: existing.inserted_at,
            updated_at: Utc::now(),
        };

        if !self.store.replace(id, book) {
            // Removed between the lookup and the replace
            return Err(AppError::NotFound(
                "Gagal memperbarui buku. Id tidak ditemukan".to_string(),
            ));
        }

        tracing::info!("Book updated id={}", id);
        Ok(())
    }

    /// Remove the record by id
    pub fn delete_book(&self, id: &str) -> AppResult<()> {
        if !self.store.remove(id) {
            return Err(AppError::NotFound(
                "Buku gagal dihapus. Id tidak ditemukan".to_string(),
            ));
        }

        tracing::info!("Book deleted id={}", id);
        Ok(())
    }
}

fn require_name(payload: &BookPayload, message: &str) -> AppResult<String> {
    payload
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::Validation(message.to_string()))
}
