use axum::{
    extract::{RawQuery, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        recipe::{
            CreateRecipeDto, PaginatedRecipesDto, RecipeDto, ShortRecipeDto, UpdateRecipeDto,
        },
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            extract::{ApiJson, ApiPath, ApiQuery},
            token::TokenAuth,
        },
        model::{
            recipe::{CreateRecipeParams, RecipeListQuery, UpdateRecipeParams},
            shopping_list::ShoppingListFormat,
        },
        service::{
            collection::{Collection, CollectionService},
            recipe::RecipeService,
            shopping_list::ShoppingListService,
        },
        state::AppState,
        util::parse::QueryPairs,
    },
};

/// Tag for grouping recipe endpoints in OpenAPI documentation
pub static RECIPE_TAG: &str = "recipes";

#[derive(Deserialize)]
pub struct DownloadParams {
    pub format: Option<String>,
}

/// Get a page of recipes, newest first.
///
/// The query string is read raw because `tags` may be repeated. The `is_favorited`
/// and `is_in_shopping_cart` flags only match anything for an authenticated user.
///
/// # Returns
/// - `200 OK` - Page of recipes
/// - `400 Bad Request` - Malformed query parameter
/// - `401 Unauthorized` - Token sent but invalid
#[utoipa::path(
    get,
    path = "/api/recipes/",
    tag = RECIPE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 6)"),
        ("author" = Option<i32>, Query, description = "Only recipes by this author"),
        ("tags" = Option<Vec<String>>, Query, description = "Tag slugs, repeatable; matches any"),
        ("is_favorited" = Option<u8>, Query, description = "1 to show only the user's favorites"),
        ("is_in_shopping_cart" = Option<u8>, Query, description = "1 to show only recipes in the user's cart"),
        ("name" = Option<String>, Query, description = "Substring of the recipe name")
    ),
    responses(
        (status = 200, description = "Page of recipes", body = PaginatedRecipesDto),
        (status = 400, description = "Invalid query parameter", body = ErrorDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recipes(
    State(state): State<AppState>,
    token: TokenAuth,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &token).optional().await?;

    let query = RecipeListQuery::from_query(&QueryPairs::parse(query.as_deref()))?;

    let recipes = RecipeService::new(&state.db)
        .get_paginated(query, viewer.map(|u| u.id))
        .await?;

    Ok((StatusCode::OK, Json(recipes.into_dto())))
}

/// Create a recipe authored by the current user.
///
/// Tags and ingredients must exist and must not repeat. The recipe and its links are
/// written in a single transaction.
///
/// # Returns
/// - `201 Created` - The new recipe
/// - `400 Bad Request` - Invalid fields, with per-field messages
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    post,
    path = "/api/recipes/",
    tag = RECIPE_TAG,
    request_body = CreateRecipeDto,
    responses(
        (status = 201, description = "Recipe created", body = RecipeDto),
        (status = 400, description = "Invalid recipe data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    token: TokenAuth,
    ApiJson(payload): ApiJson<CreateRecipeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let params = CreateRecipeParams::from_dto(user.id, payload)?;
    let recipe = RecipeService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(recipe.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/recipes/{recipe_id}/",
    tag = RECIPE_TAG,
    params(
        ("recipe_id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe found", body = RecipeDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    token: TokenAuth,
    ApiPath(recipe_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &token).optional().await?;

    let recipe = RecipeService::new(&state.db)
        .get_by_id(recipe_id, viewer.map(|u| u.id))
        .await?
        .ok_or_else(|| AppError::NotFound("Recipe not found".to_string()))?;

    Ok((StatusCode::OK, Json(recipe.into_dto())))
}

/// Update a recipe, replacing its tags and ingredients.
///
/// # Access Control
/// - `RecipeAuthor` - Only the author or an admin can update the recipe
///
/// # Returns
/// - `200 OK` - Updated recipe
/// - `400 Bad Request` - Invalid fields
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not the author
/// - `404 Not Found` - Recipe does not exist
#[utoipa::path(
    patch,
    path = "/api/recipes/{recipe_id}/",
    tag = RECIPE_TAG,
    params(
        ("recipe_id" = i32, Path, description = "Recipe ID")
    ),
    request_body = UpdateRecipeDto,
    responses(
        (status = 200, description = "Recipe updated", body = RecipeDto),
        (status = 400, description = "Invalid recipe data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn update_recipe(
    State(state): State<AppState>,
    token: TokenAuth,
    ApiPath(recipe_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateRecipeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token)
        .require(&[Permission::RecipeAuthor(recipe_id)])
        .await?;

    let params = UpdateRecipeParams::from_dto(recipe_id, payload)?;
    let recipe = RecipeService::new(&state.db).update(params, user.id).await?;

    Ok((StatusCode::OK, Json(recipe.into_dto())))
}

/// Delete a recipe.
///
/// # Access Control
/// - `RecipeAuthor` - Only the author or an admin can delete the recipe
#[utoipa::path(
    delete,
    path = "/api/recipes/{recipe_id}/",
    tag = RECIPE_TAG,
    params(
        ("recipe_id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    token: TokenAuth,
    ApiPath(recipe_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &token)
        .require(&[Permission::RecipeAuthor(recipe_id)])
        .await?;

    RecipeService::new(&state.db).delete(recipe_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a recipe to the current user's favorites.
#[utoipa::path(
    post,
    path = "/api/recipes/{recipe_id}/favorite/",
    tag = RECIPE_TAG,
    params(
        ("recipe_id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 201, description = "Recipe added to favorites", body = ShortRecipeDto),
        (status = 400, description = "Recipe already in favorites", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    token: TokenAuth,
    ApiPath(recipe_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    add_to_collection(&state, &token, Collection::Favorites, recipe_id).await
}

#[utoipa::path(
    delete,
    path = "/api/recipes/{recipe_id}/favorite/",
    tag = RECIPE_TAG,
    params(
        ("recipe_id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 204, description = "Recipe removed from favorites"),
        (status = 400, description = "Recipe not in favorites", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    token: TokenAuth,
    ApiPath(recipe_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    remove_from_collection(&state, &token, Collection::Favorites, recipe_id).await
}

/// Add a recipe to the current user's shopping cart.
#[utoipa::path(
    post,
    path = "/api/recipes/{recipe_id}/shopping_cart/",
    tag = RECIPE_TAG,
    params(
        ("recipe_id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 201, description = "Recipe added to shopping cart", body = ShortRecipeDto),
        (status = 400, description = "Recipe already in shopping cart", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn add_to_shopping_cart(
    State(state): State<AppState>,
    token: TokenAuth,
    ApiPath(recipe_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    add_to_collection(&state, &token, Collection::ShoppingCart, recipe_id).await
}

#[utoipa::path(
    delete,
    path = "/api/recipes/{recipe_id}/shopping_cart/",
    tag = RECIPE_TAG,
    params(
        ("recipe_id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 204, description = "Recipe removed from shopping cart"),
        (status = 400, description = "Recipe not in shopping cart", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn remove_from_shopping_cart(
    State(state): State<AppState>,
    token: TokenAuth,
    ApiPath(recipe_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    remove_from_collection(&state, &token, Collection::ShoppingCart, recipe_id).await
}

/// Download the aggregated ingredients of every recipe in the shopping cart.
///
/// # Returns
/// - `200 OK` - `shopping_list.txt` (default) or `shopping_list.pdf` as an attachment
/// - `400 Bad Request` - Unsupported format
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    get,
    path = "/api/recipes/download_shopping_cart/",
    tag = RECIPE_TAG,
    params(
        ("format" = Option<String>, Query, description = "`txt` (default) or `pdf`")
    ),
    responses(
        (status = 200, description = "Shopping list file, plain text or PDF", body = String, content_type = "text/plain"),
        (status = 400, description = "Unsupported format", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn download_shopping_cart(
    State(state): State<AppState>,
    token: TokenAuth,
    ApiQuery(params): ApiQuery<DownloadParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let format = ShoppingListFormat::from_param(params.format.as_deref())?;
    let body = ShoppingListService::new(&state.db)
        .export(user.id, format)
        .await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", format.file_name()),
            ),
        ],
        body,
    ))
}

async fn add_to_collection(
    state: &AppState,
    token: &TokenAuth,
    collection: Collection,
    recipe_id: i32,
) -> Result<(StatusCode, Json<ShortRecipeDto>), AppError> {
    let user = AuthGuard::new(&state.db, token).require(&[]).await?;

    let recipe = CollectionService::new(&state.db)
        .add(collection, user.id, recipe_id)
        .await?;

    Ok((StatusCode::CREATED, Json(recipe.into_dto())))
}

async fn remove_from_collection(
    state: &AppState,
    token: &TokenAuth,
    collection: Collection,
    recipe_id: i32,
) -> Result<StatusCode, AppError> {
    let user = AuthGuard::new(&state.db, token).require(&[]).await?;

    CollectionService::new(&state.db)
        .remove(collection, user.id, recipe_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
