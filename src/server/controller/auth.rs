use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, TokenDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            extract::ApiJson,
            token::TokenAuth,
        },
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Exchange email and password for an auth token.
///
/// The returned key is sent back on later requests as `Authorization: Token <key>`.
/// Logging in again returns the same key until the user logs out.
///
/// # Returns
/// - `201 Created` - Token issued
/// - `400 Bad Request` - Unknown email, wrong password or missing field
#[utoipa::path(
    post,
    path = "/api/auth/token/login/",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 201, description = "Token issued", body = TokenDto),
        (status = 400, description = "Unable to log in with provided credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_token = AuthService::new(&state.db)
        .login(payload.email, payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(TokenDto { auth_token })))
}

/// Delete the current user's auth token.
///
/// # Returns
/// - `204 No Content` - Token deleted
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/auth/token/logout/",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn logout(
    State(state): State<AppState>,
    token: TokenAuth,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    AuthService::new(&state.db).logout(user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
