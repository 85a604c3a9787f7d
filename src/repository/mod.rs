//! Repository layer owning the in-memory inventory

pub mod books;

use crate::models::Book;

/// Main repository struct holding the shared inventory store
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository with an empty inventory
    pub fn new() -> Self {
        Self {
            books: books::BooksRepository::new(),
        }
    }

    /// Create a new repository pre-seeded with the given books
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: books::BooksRepository::with_books(books),
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
