//! Body, query and path extractors that fail with `AppError`.
//!
//! Axum's own extractors answer malformed input with plain-text 400/415/422 responses.
//! These wrappers route every rejection through `AppError` so clients always receive
//! an `ErrorDto`.

use axum::extract::{FromRequest, FromRequestParts, Path, Query};

use crate::server::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Query string deserialized into `T`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Path parameters; a segment of the wrong type is a 404 like any unknown URL.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
