//! Bookstore Inventory Service
//!
//! A small Rust REST API server exposing an in-memory catalog of book
//! records with basic inventory operations: list, add, fetch-by-id,
//! checkout and return.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
