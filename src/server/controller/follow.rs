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
        follow::{PaginatedSubscriptionsDto, SubscriptionDto},
    },
    server::{
        controller::user::USER_TAG,
        error::AppError,
        middleware::{
            auth::AuthGuard,
            extract::{ApiPath, ApiQuery},
            token::TokenAuth,
        },
        model::pagination::PageParams,
        service::follow::FollowService,
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct RecipesLimitParams {
    pub recipes_limit: Option<u64>,
}

#[derive(Deserialize)]
pub struct SubscriptionListParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub recipes_limit: Option<u64>,
}

/// Follow an author.
///
/// # Returns
/// - `201 Created` - Subscription with a preview of the author's newest recipes
/// - `400 Bad Request` - Following oneself, or already subscribed
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Author does not exist
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/subscribe/",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the author to follow"),
        ("recipes_limit" = Option<u64>, Query, description = "Maximum number of recipes in the preview")
    ),
    responses(
        (status = 201, description = "Subscribed", body = SubscriptionDto),
        (status = 400, description = "Cannot subscribe", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn subscribe(
    State(state): State<AppState>,
    token: TokenAuth,
    ApiPath(author_id): ApiPath<i32>,
    ApiQuery(params): ApiQuery<RecipesLimitParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let subscription = FollowService::new(&state.db)
        .subscribe(user.id, author_id, params.recipes_limit)
        .await?;

    Ok((StatusCode::CREATED, Json(subscription.into_dto())))
}

/// Stop following an author.
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}/subscribe/",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the author to unfollow")
    ),
    responses(
        (status = 204, description = "Unsubscribed"),
        (status = 400, description = "Not subscribed to this user", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn unsubscribe(
    State(state): State<AppState>,
    token: TokenAuth,
    ApiPath(author_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    FollowService::new(&state.db)
        .unsubscribe(user.id, author_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get a page of authors the current user follows.
#[utoipa::path(
    get,
    path = "/api/users/subscriptions/",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 6)"),
        ("recipes_limit" = Option<u64>, Query, description = "Maximum number of recipes per author")
    ),
    responses(
        (status = 200, description = "Page of subscriptions", body = PaginatedSubscriptionsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn get_subscriptions(
    State(state): State<AppState>,
    token: TokenAuth,
    ApiQuery(params): ApiQuery<SubscriptionListParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let subscriptions = FollowService::new(&state.db)
        .get_paginated(
            user.id,
            PageParams::new(params.page, params.limit),
            params.recipes_limit,
        )
        .await?;

    Ok((StatusCode::OK, Json(subscriptions.into_dto())))
}
