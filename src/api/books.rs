//! Book inventory endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

/// Query parameters for checkout and return.
///
/// `id` is optional at the extractor level so a missing parameter surfaces
/// as our own 400 instead of an axum rejection.
#[derive(Deserialize)]
pub struct IdParams {
    pub id: Option<String>,
}

/// Acknowledgment body for a successful return
#[derive(Serialize, ToSchema)]
pub struct ReturnResponse {
    pub message: String,
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Full catalog in insertion order", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> Json<Vec<Book>> {
    Json(state.services.inventory.list_books().await)
}

/// Add a book to the inventory
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book added, full catalog returned", body = Vec<Book>)
    )
)]
pub async fn add_book(
    State(state): State<crate::AppState>,
    Json(book): Json<Book>,
) -> (StatusCode, Json<Vec<Book>>) {
    let books = state.services.inventory.add_book(book).await;
    (StatusCode::CREATED, Json(books))
}

/// Get a book by id
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Matching book", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.inventory.get_book(&id).await?;
    Ok(Json(book))
}

/// Check out one unit of a book
#[utoipa::path(
    patch,
    path = "/checkout",
    tag = "books",
    params(
        ("id" = String, Query, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Updated book", body = Book),
        (status = 400, description = "Missing id or book not available", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn checkout_book(
    State(state): State<crate::AppState>,
    Query(params): Query<IdParams>,
) -> AppResult<Json<Book>> {
    let id = params.id.ok_or(AppError::MissingParameter("id"))?;
    let book = state.services.inventory.checkout_book(&id).await?;
    Ok(Json(book))
}

/// Return one unit of a book
#[utoipa::path(
    patch,
    path = "/return",
    tag = "books",
    params(
        ("id" = String, Query, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book returned", body = ReturnResponse),
        (status = 400, description = "Missing id or book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    Query(params): Query<IdParams>,
) -> AppResult<Json<ReturnResponse>> {
    let id = params.id.ok_or(AppError::MissingParameter("id"))?;

    match state.services.inventory.return_book(&id).await {
        Ok(_) => Ok(Json(ReturnResponse {
            message: "book returned successfully".to_string(),
        })),
        // The return endpoint reports a missing book as a bad request,
        // not 404. That status is part of the published contract.
        Err(AppError::NotFound(msg)) => Err(AppError::BadRequest(msg)),
        Err(e) => Err(e),
    }
}
