//! Repository layer for in-memory storage

pub mod books;

pub use books::BookStore;
