//! Handlers for link endpoints.

use axum::{
    Extension, Json,
    extract::{Path, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::links::{LinkListResponse, LinkResponse, SubmitRequest};
use crate::error::AppError;
use crate::session::BoardSession;

/// Submits pasted text as a new entry on the caller's board.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response Codes
///
/// - **201 Created**: entry created, body is the entry
/// - **204 No Content**: text was blank, nothing created
/// - **400 Bad Request**: body is not a JSON object with a `url` string
pub async fn submit_handler(
    Extension(session): Extension<BoardSession>,
    payload: Result<Json<SubmitRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload?;

    let Some(entry) = session.board.submit(&payload.url).await else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let snapshot = session.board.entry(entry.short_code()).await?;

    Ok((StatusCode::CREATED, Json(LinkResponse::from(snapshot))).into_response())
}

/// Lists every entry on the caller's board, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// # Response
///
/// ```json
/// {
///   "total": 1,
///   "items": [
///     {
///       "original_url": "https://example.com",
///       "short_code": "aZ3k",
///       "short_url": "http://localhost:3000/aZ3k",
///       "created_at": "2024-05-01T12:00:00Z",
///       "expires_at": "2024-05-01T12:30:00Z",
///       "remaining_ms": 1799000,
///       "countdown": "29:59",
///       "expired": false
///     }
///   ]
/// }
/// ```
pub async fn list_handler(Extension(session): Extension<BoardSession>) -> Json<LinkListResponse> {
    let items: Vec<LinkResponse> = session
        .board
        .entries()
        .await
        .into_iter()
        .map(LinkResponse::from)
        .collect();

    Json(LinkListResponse {
        total: items.len(),
        items,
    })
}

/// Returns a single entry with its countdown.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if no entry on the caller's board holds the code.
pub async fn link_handler(
    Extension(session): Extension<BoardSession>,
    Path(code): Path<String>,
) -> Result<Json<LinkResponse>, AppError> {
    let snapshot = session.board.entry(&code).await?;
    Ok(Json(LinkResponse::from(snapshot)))
}
