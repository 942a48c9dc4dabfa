use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        tag::{CreateTagDto, TagDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            extract::{ApiJson, ApiPath},
            token::TokenAuth,
        },
        model::tag::{CreateTagParams, Tag},
        service::tag::TagService,
        state::AppState,
    },
};

/// Tag for grouping recipe tag endpoints in OpenAPI documentation
pub static TAG_TAG: &str = "tags";

/// Get all tags, ordered by name.
#[utoipa::path(
    get,
    path = "/api/tags/",
    tag = TAG_TAG,
    responses(
        (status = 200, description = "All tags", body = Vec<TagDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tags(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tags = TagService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(tags.into_iter().map(Tag::into_dto).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/tags/{tag_id}/",
    tag = TAG_TAG,
    params(
        ("tag_id" = i32, Path, description = "Tag ID")
    ),
    responses(
        (status = 200, description = "Tag found", body = TagDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tag(
    State(state): State<AppState>,
    ApiPath(tag_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let tag = TagService::new(&state.db)
        .get_by_id(tag_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Tag not found".to_string()))?;

    Ok((StatusCode::OK, Json(tag.into_dto())))
}

/// Create a tag.
///
/// # Access Control
/// - `Admin` - Only admins can create tags
///
/// # Returns
/// - `201 Created` - The new tag
/// - `400 Bad Request` - Invalid fields, or name/color/slug already used
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
#[utoipa::path(
    post,
    path = "/api/tags/",
    tag = TAG_TAG,
    request_body = CreateTagDto,
    responses(
        (status = 201, description = "Tag created", body = TagDto),
        (status = 400, description = "Invalid tag data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn create_tag(
    State(state): State<AppState>,
    token: TokenAuth,
    ApiJson(payload): ApiJson<CreateTagDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &token)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateTagParams::from_dto(payload)?;
    let tag = TagService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(tag.into_dto())))
}
