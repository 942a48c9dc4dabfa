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
        ingredient::{CreateIngredientDto, IngredientDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            extract::{ApiJson, ApiPath, ApiQuery},
            token::TokenAuth,
        },
        model::ingredient::{CreateIngredientParams, Ingredient},
        service::ingredient::IngredientService,
        state::AppState,
    },
};

/// Tag for grouping ingredient endpoints in OpenAPI documentation
pub static INGREDIENT_TAG: &str = "ingredients";

#[derive(Deserialize)]
pub struct IngredientSearchParams {
    pub name: Option<String>,
}

/// Search ingredients by name prefix.
///
/// Without `name` every ingredient is returned. Results are not paginated.
#[utoipa::path(
    get,
    path = "/api/ingredients/",
    tag = INGREDIENT_TAG,
    params(
        ("name" = Option<String>, Query, description = "Name prefix to search for")
    ),
    responses(
        (status = 200, description = "Matching ingredients", body = Vec<IngredientDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ingredients(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<IngredientSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let ingredients = IngredientService::new(&state.db)
        .search(params.name.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            ingredients
                .into_iter()
                .map(Ingredient::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/api/ingredients/{ingredient_id}/",
    tag = INGREDIENT_TAG,
    params(
        ("ingredient_id" = i32, Path, description = "Ingredient ID")
    ),
    responses(
        (status = 200, description = "Ingredient found", body = IngredientDto),
        (status = 404, description = "Ingredient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ingredient(
    State(state): State<AppState>,
    ApiPath(ingredient_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let ingredient = IngredientService::new(&state.db)
        .get_by_id(ingredient_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Ingredient not found".to_string()))?;

    Ok((StatusCode::OK, Json(ingredient.into_dto())))
}

/// Create an ingredient.
///
/// # Access Control
/// - `Admin` - Only admins can create ingredients
#[utoipa::path(
    post,
    path = "/api/ingredients/",
    tag = INGREDIENT_TAG,
    request_body = CreateIngredientDto,
    responses(
        (status = 201, description = "Ingredient created", body = IngredientDto),
        (status = 400, description = "Invalid or duplicate ingredient", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn create_ingredient(
    State(state): State<AppState>,
    token: TokenAuth,
    ApiJson(payload): ApiJson<CreateIngredientDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &token)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateIngredientParams::from_dto(payload)?;
    let ingredient = IngredientService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(ingredient.into_dto())))
}
