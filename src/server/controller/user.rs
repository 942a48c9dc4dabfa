use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        user::{
            CreatedUserDto, PaginatedUsersDto, RegisterUserDto, SetPasswordDto, UpdateUserDto,
            UserDto,
        },
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            extract::{ApiJson, ApiPath, ApiQuery},
            token::TokenAuth,
        },
        model::{
            pagination::PageParams,
            user::{RegisterUserParams, UpdateUserParams},
        },
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "users";

#[derive(Deserialize)]
pub struct PaginationParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

/// Register a new user.
///
/// # Returns
/// - `201 Created` - The new user
/// - `400 Bad Request` - Invalid fields, or email/username already taken
#[utoipa::path(
    post,
    path = "/api/users/",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User registered", body = CreatedUserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterUserParams::from_dto(payload)?;

    let user = UserService::new(&state.db).register(params).await?;

    Ok((StatusCode::CREATED, Json(user.into_created_dto())))
}

/// Get a page of users.
///
/// Open to anonymous visitors; `is_subscribed` is always false for them.
#[utoipa::path(
    get,
    path = "/api/users/",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 6)")
    ),
    responses(
        (status = 200, description = "Page of users", body = PaginatedUsersDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    token: TokenAuth,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &token).optional().await?;

    let users = UserService::new(&state.db)
        .get_paginated(
            PageParams::new(params.page, params.limit),
            viewer.map(|u| u.id),
        )
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Get a user by ID.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    token: TokenAuth,
    ApiPath(user_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &token).optional().await?;

    let profile = UserService::new(&state.db)
        .get_profile(user_id, viewer.map(|u| u.id))
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Get the current user.
#[utoipa::path(
    get,
    path = "/api/users/me/",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn get_me(
    State(state): State<AppState>,
    token: TokenAuth,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto(false))))
}

/// Partially update the current user's profile.
///
/// Only fields present in the payload are changed. Email and username stay unique.
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Invalid fields or email/username already taken
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    patch,
    path = "/api/users/me/",
    tag = USER_TAG,
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn update_me(
    State(state): State<AppState>,
    token: TokenAuth,
    ApiJson(payload): ApiJson<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let params = UpdateUserParams::from_dto(user.id, payload)?;
    let user = UserService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(user.into_dto(false))))
}

/// Change the current user's password.
///
/// # Returns
/// - `204 No Content` - Password changed
/// - `400 Bad Request` - Wrong current password or weak new password
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    post,
    path = "/api/users/set_password/",
    tag = USER_TAG,
    request_body = SetPasswordDto,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "Invalid password data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn set_password(
    State(state): State<AppState>,
    token: TokenAuth,
    ApiJson(payload): ApiJson<SetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    UserService::new(&state.db)
        .set_password(user.id, payload.current_password, payload.new_password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
