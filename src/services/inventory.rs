//! Inventory management service

use crate::{error::AppResult, models::Book, repository::Repository};

#[derive(Clone)]
pub struct InventoryService {
    repository: Repository,
}

impl InventoryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List the full catalog
    pub async fn list_books(&self) -> Vec<Book> {
        self.repository.books.list().await
    }

    /// Add a book and return the updated catalog
    pub async fn add_book(&self, book: Book) -> Vec<Book> {
        tracing::debug!(id = %book.id, "adding book to inventory");
        self.repository.books.add(book).await
    }

    /// Fetch a single book by id
    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Check out one unit of a book
    pub async fn checkout_book(&self, id: &str) -> AppResult<Book> {
        let book = self.repository.books.checkout(id).await?;
        tracing::debug!(id = %book.id, quantity = book.quantity, "book checked out");
        Ok(book)
    }

    /// Return one unit of a book
    pub async fn return_book(&self, id: &str) -> AppResult<Book> {
        let book = self.repository.books.return_book(id).await?;
        tracing::debug!(id = %book.id, quantity = book.quantity, "book returned");
        Ok(book)
    }
}
