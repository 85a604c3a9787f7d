//! API handlers for the bookstore REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Inventory
        .route("/books", get(books::list_books).post(books::add_book))
        .route("/books/:id", get(books::get_book))
        .route("/checkout", patch(books::checkout_book))
        .route("/return", patch(books::return_book))
        .with_state(state)
        // OpenAPI documentation
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
