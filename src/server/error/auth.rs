use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carries no `Authorization: Token <key>` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Authentication credentials were not provided")]
    MissingToken,

    /// The supplied token does not match any stored token.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid token")]
    InvalidToken,

    /// Login attempt with an unknown email or a wrong password.
    ///
    /// Results in a 400 Bad Request response. The message does not reveal which
    /// of the two was wrong.
    #[error("Unable to log in with provided credentials")]
    InvalidCredentials,

    /// User is authenticated but lacks the permission required by the endpoint.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Reason, logged server-side only
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` → 401 Unauthorized
/// - `InvalidCredentials` → 400 Bad Request
/// - `AccessDenied` → 403 Forbidden, with the reason logged at debug level
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new(
                    "Authentication credentials were not provided.",
                )),
            )
                .into_response(),
            Self::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Invalid token.")),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new("Unable to log in with provided credentials.")),
            )
                .into_response(),
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!("Access denied for user {}: {}", user_id, reason);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto::new(
                        "You do not have permission to perform this action.",
                    )),
                )
                    .into_response()
            }
        }
    }
}
