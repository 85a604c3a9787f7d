//! Data models for the bookstore inventory

pub mod book;

pub use book::Book;
