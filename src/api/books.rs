//! Book endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{Book, BookPayload, BookQuery, BookSummary},
};

/// Envelope for a successful create
#[derive(Serialize, ToSchema)]
pub struct BookCreatedResponse {
    /// Always "success"
    pub status: String,
    pub message: String,
    pub data: BookCreatedData,
}

#[derive(Serialize, ToSchema)]
pub struct BookCreatedData {
    #[serde(rename = "bookId")]
    pub book_id: String,
}

/// Envelope for list responses
#[derive(Serialize, ToSchema)]
pub struct BookListResponse {
    pub status: String,
    pub data: BookListData,
}

#[derive(Serialize, ToSchema)]
pub struct BookListData {
    pub books: Vec<BookSummary>,
}

/// Envelope for a single full record
#[derive(Serialize, ToSchema)]
pub struct BookResponse {
    pub status: String,
    pub data: BookData,
}

#[derive(Serialize, ToSchema)]
pub struct BookData {
    pub book: Book,
}

/// Envelope for update and delete confirmations (no echoed data)
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub status: String,
    pub message: String,
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created", body = BookCreatedResponse),
        (status = 400, description = "Missing name or readPage exceeds pageCount", body = crate::error::FailResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(payload): Json<BookPayload>,
) -> AppResult<(StatusCode, Json<BookCreatedResponse>)> {
    let book_id = state.services.shelf.create_book(payload)?;

    Ok((
        StatusCode::CREATED,
        Json(BookCreatedResponse {
            status: "success".to_string(),
            message: "Buku berhasil ditambahkan".to_string(),
            data: BookCreatedData { book_id },
        }),
    ))
}

/// List books, optionally filtered
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "List of books", body = BookListResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> Json<BookListResponse> {
    let books = state.services.shelf.list_books(&query);

    Json(BookListResponse {
        status: "success".to_string(),
        data: BookListData { books },
    })
}

/// Get full book details by id
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book id")
    ),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::error::FailResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.shelf.get_book(&id)?;

    Ok(Json(BookResponse {
        status: "success".to_string(),
        data: BookData { book },
    }))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book id")
    ),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Missing name or readPage exceeds pageCount", body = crate::error::FailResponse),
        (status = 404, description = "Book not found", body = crate::error::FailResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(payload): Json<BookPayload>,
) -> AppResult<Json<MessageResponse>> {
    state.services.shelf.update_book(&id, payload)?;

    Ok(Json(MessageResponse {
        status: "success".to_string(),
        message: "Buku berhasil diperbarui".to_string(),
    }))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book id")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::FailResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.shelf.delete_book(&id)?;

    Ok(Json(MessageResponse {
        status: "success".to_string(),
        message: "Buku berhasil dihapus".to_string(),
    }))
}
