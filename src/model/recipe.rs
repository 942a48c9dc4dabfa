use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{tag::TagDto, user::UserDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeIngredientDto {
    /// Ingredient ID
    pub id: i32,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeDto {
    pub id: i32,
    pub tags: Vec<TagDto>,
    pub author: UserDto,
    pub ingredients: Vec<RecipeIngredientDto>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
    pub name: String,
    /// Image as a `data:image/...;base64,` URI
    pub image: String,
    pub text: String,
    /// Minutes
    pub cooking_time: i32,
}

/// Compact recipe returned by favorites, shopping cart and subscriptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShortRecipeDto {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub cooking_time: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipeIngredientAmountDto {
    /// Ingredient ID
    pub id: i32,
    pub amount: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateRecipeDto {
    #[serde(default)]
    pub ingredients: Option<Vec<RecipeIngredientAmountDto>>,
    /// Tag IDs
    #[serde(default)]
    pub tags: Option<Vec<i32>>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub cooking_time: Option<i64>,
}

/// Same shape as creation; `image` may be omitted to keep the current one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateRecipeDto {
    #[serde(default)]
    pub ingredients: Option<Vec<RecipeIngredientAmountDto>>,
    #[serde(default)]
    pub tags: Option<Vec<i32>>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub cooking_time: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedRecipesDto {
    pub count: u64,
    pub next: Option<u64>,
    pub previous: Option<u64>,
    pub results: Vec<RecipeDto>,
}
