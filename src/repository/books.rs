//! In-memory book inventory store
//!
//! The collection is a single insertion-ordered `Vec` behind an `RwLock`.
//! Every mutating operation takes the write lock for its whole duration, so
//! mutations are serialized: two concurrent checkouts of the last copy
//! cannot both observe `quantity == 1`, and quantity can never go negative.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

/// Shared in-memory store of book records
#[derive(Clone)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            books: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a store pre-seeded with the given books
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }

    /// Snapshot of the full collection in insertion order
    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    /// Append a book unconditionally and return the updated collection.
    ///
    /// No field validation and no uniqueness check: duplicate ids are
    /// accepted, and id-targeted lookups resolve to the first match.
    pub async fn add(&self, book: Book) -> Vec<Book> {
        let mut books = self.books.write().await;
        books.push(book);
        books.clone()
    }

    /// First book matching `id` in insertion order
    pub async fn get_by_id(&self, id: &str) -> AppResult<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("book not found".to_string()))
    }

    /// Decrement the quantity of the book with `id` by one.
    ///
    /// Fails with `NotFound` when no book matches, and with `Unavailable`
    /// when the quantity is already zero. Returns the post-decrement record.
    pub async fn checkout(&self, id: &str) -> AppResult<Book> {
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound("book not found".to_string()))?;

        if book.quantity == 0 {
            return Err(AppError::Unavailable("book not available".to_string()));
        }

        book.quantity -= 1;
        Ok(book.clone())
    }

    /// Increment the quantity of the book with `id` by one.
    ///
    /// The increment is unconditional: there is no ceiling and no check
    /// that the book was previously checked out.
    pub async fn return_book(&self, id: &str) -> AppResult<Book> {
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound("book not found".to_string()))?;

        book.quantity += 1;
        Ok(book.clone())
    }
}

impl Default for BooksRepository {
    fn default() -> Self {
        Self::new()
    }
}
