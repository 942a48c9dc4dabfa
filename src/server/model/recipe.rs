//! Recipe domain models and parameters.
//!
//! A recipe is stored across several tables (the recipe row, its tag links and its
//! ingredient amounts). The repository loads those rows into `RecipeWithRelations`,
//! which is converted to the `Recipe` domain model here. Viewer-specific flags such as
//! "favorited" are attached afterwards through `RecipeView`.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::{
    model::recipe::{
        CreateRecipeDto, PaginatedRecipesDto, RecipeDto, RecipeIngredientAmountDto,
        RecipeIngredientDto, ShortRecipeDto, UpdateRecipeDto,
    },
    server::{
        error::{
            validation::{ValidationError, REQUIRED},
            AppError,
        },
        model::{
            ingredient::Ingredient,
            pagination::{Page, PageParams},
            tag::Tag,
            user::User,
        },
        util::{
            parse::QueryPairs,
            validate::{self, MAX_RECIPE_NAME_LENGTH},
        },
    },
};

/// Raw rows making up one recipe, as loaded by the repository.
#[derive(Debug, Clone)]
pub struct RecipeWithRelations {
    pub recipe: entity::recipe::Model,
    pub author: entity::user::Model,
    pub tags: Vec<entity::tag::Model>,
    pub ingredients: Vec<(entity::recipe_ingredient::Model, entity::ingredient::Model)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeIngredient {
    pub ingredient: Ingredient,
    pub amount: i32,
}

impl RecipeIngredient {
    pub fn into_dto(self) -> RecipeIngredientDto {
        RecipeIngredientDto {
            id: self.ingredient.id,
            name: self.ingredient.name,
            measurement_unit: self.ingredient.measurement_unit,
            amount: self.amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: i32,
    pub author: User,
    pub name: String,
    pub image: String,
    pub text: String,
    pub cooking_time: i32,
    pub pub_date: DateTime<Utc>,
    pub tags: Vec<Tag>,
    pub ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    pub fn from_with_relations(rows: RecipeWithRelations) -> Self {
        Self {
            id: rows.recipe.id,
            author: User::from_entity(rows.author),
            name: rows.recipe.name,
            image: rows.recipe.image,
            text: rows.recipe.text,
            cooking_time: rows.recipe.cooking_time,
            pub_date: rows.recipe.pub_date,
            tags: rows.tags.into_iter().map(Tag::from_entity).collect(),
            ingredients: rows
                .ingredients
                .into_iter()
                .map(|(link, ingredient)| RecipeIngredient {
                    ingredient: Ingredient::from_entity(ingredient),
                    amount: link.amount,
                })
                .collect(),
        }
    }
}

/// Recipe as seen by a particular viewer.
#[derive(Debug, Clone)]
pub struct RecipeView {
    pub recipe: Recipe,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
    /// Whether the viewer follows the recipe's author
    pub author_subscribed: bool,
}

impl RecipeView {
    /// View for an anonymous visitor: every flag is false.
    pub fn anonymous(recipe: Recipe) -> Self {
        Self {
            recipe,
            is_favorited: false,
            is_in_shopping_cart: false,
            author_subscribed: false,
        }
    }

    pub fn into_dto(self) -> RecipeDto {
        let recipe = self.recipe;
        RecipeDto {
            id: recipe.id,
            tags: recipe.tags.into_iter().map(Tag::into_dto).collect(),
            author: recipe.author.into_dto(self.author_subscribed),
            ingredients: recipe
                .ingredients
                .into_iter()
                .map(RecipeIngredient::into_dto)
                .collect(),
            is_favorited: self.is_favorited,
            is_in_shopping_cart: self.is_in_shopping_cart,
            name: recipe.name,
            image: recipe.image,
            text: recipe.text,
            cooking_time: recipe.cooking_time,
        }
    }
}

impl Page<RecipeView> {
    pub fn into_dto(self) -> PaginatedRecipesDto {
        PaginatedRecipesDto {
            count: self.total,
            next: self.next(),
            previous: self.previous(),
            results: self.items.into_iter().map(RecipeView::into_dto).collect(),
        }
    }
}

/// Recipe summary used by favorites, the shopping cart and subscriptions.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortRecipe {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub cooking_time: i32,
}

impl ShortRecipe {
    pub fn from_entity(entity: entity::recipe::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            image: entity.image,
            cooking_time: entity.cooking_time,
        }
    }

    pub fn into_dto(self) -> ShortRecipeDto {
        ShortRecipeDto {
            id: self.id,
            name: self.name,
            image: self.image,
            cooking_time: self.cooking_time,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeIngredientParam {
    pub ingredient_id: i32,
    pub amount: i32,
}

/// Fields shared by recipe creation and update, already shape-checked.
///
/// Whether the referenced tags and ingredients exist is checked by the service.
#[derive(Debug, Clone)]
pub struct RecipeFields {
    pub name: String,
    pub text: String,
    pub cooking_time: i32,
    pub tags: Vec<i32>,
    pub ingredients: Vec<RecipeIngredientParam>,
}

#[derive(Debug, Clone)]
pub struct CreateRecipeParams {
    pub author_id: i32,
    pub image: String,
    pub fields: RecipeFields,
}

impl CreateRecipeParams {
    pub fn from_dto(author_id: i32, dto: CreateRecipeDto) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();

        let image = match dto.image.filter(|i| !i.trim().is_empty()) {
            Some(image) => Some(image).filter(|i| validate::image(&mut errors, "image", i)),
            None => {
                errors.add("image", REQUIRED);
                None
            }
        };
        let fields = RecipeFields::validate(
            &mut errors,
            dto.name,
            dto.text,
            dto.cooking_time,
            dto.tags,
            dto.ingredients,
        );

        match (image, fields) {
            (Some(image), Some(fields)) if errors.is_empty() => Ok(Self {
                author_id,
                image,
                fields,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateRecipeParams {
    pub id: i32,
    /// `None` keeps the current image
    pub image: Option<String>,
    pub fields: RecipeFields,
}

impl UpdateRecipeParams {
    pub fn from_dto(id: i32, dto: UpdateRecipeDto) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();

        let image = dto
            .image
            .filter(|i| !i.trim().is_empty())
            .filter(|i| validate::image(&mut errors, "image", i));
        let fields = RecipeFields::validate(
            &mut errors,
            dto.name,
            dto.text,
            dto.cooking_time,
            dto.tags,
            dto.ingredients,
        );

        match fields {
            Some(fields) if errors.is_empty() => Ok(Self { id, image, fields }),
            _ => Err(errors),
        }
    }
}

impl RecipeFields {
    fn validate(
        errors: &mut ValidationError,
        name: Option<String>,
        text: Option<String>,
        cooking_time: Option<i64>,
        tags: Option<Vec<i32>>,
        ingredients: Option<Vec<RecipeIngredientAmountDto>>,
    ) -> Option<Self> {
        let name = validate::required_text(errors, "name", name, MAX_RECIPE_NAME_LENGTH);
        let text = validate::required_text(errors, "text", text, usize::MAX);
        let cooking_time = match cooking_time {
            Some(minutes) => validate::amount(errors, "cooking_time", minutes),
            None => {
                errors.add("cooking_time", REQUIRED);
                None
            }
        };
        let tags = validate_tags(errors, tags);
        let ingredients = validate_ingredients(errors, ingredients);

        Some(Self {
            name: name?,
            text: text?,
            cooking_time: cooking_time?,
            tags: tags?,
            ingredients: ingredients?,
        })
    }
}

fn validate_tags(errors: &mut ValidationError, tags: Option<Vec<i32>>) -> Option<Vec<i32>> {
    let Some(tags) = tags else {
        errors.add("tags", REQUIRED);
        return None;
    };
    if tags.is_empty() {
        errors.add("tags", "At least one tag is required.");
        return None;
    }

    let mut seen = HashSet::new();
    if !tags.iter().all(|id| seen.insert(*id)) {
        errors.add("tags", "Tags must not repeat.");
        return None;
    }

    Some(tags)
}

fn validate_ingredients(
    errors: &mut ValidationError,
    ingredients: Option<Vec<RecipeIngredientAmountDto>>,
) -> Option<Vec<RecipeIngredientParam>> {
    let Some(ingredients) = ingredients else {
        errors.add("ingredients", REQUIRED);
        return None;
    };
    if ingredients.is_empty() {
        errors.add("ingredients", "At least one ingredient is required.");
        return None;
    }

    let mut seen = HashSet::new();
    if !ingredients.iter().all(|item| seen.insert(item.id)) {
        errors.add("ingredients", "Ingredients must not repeat.");
        return None;
    }

    let mut params = Vec::with_capacity(ingredients.len());
    for item in ingredients {
        if let Some(amount) = validate::amount(errors, "ingredients", item.amount) {
            params.push(RecipeIngredientParam {
                ingredient_id: item.id,
                amount,
            });
        }
    }

    (params.len() == seen.len()).then_some(params)
}

/// Query parameters accepted by the recipe list endpoint.
#[derive(Debug, Clone, Default)]
pub struct RecipeListQuery {
    pub page: PageParams,
    pub author: Option<i32>,
    /// Tag slugs; a recipe matches when it carries any of them
    pub tags: Vec<String>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
    /// Case-sensitivity follows the database collation
    pub name: Option<String>,
}

impl RecipeListQuery {
    pub fn from_query(pairs: &QueryPairs) -> Result<Self, AppError> {
        Ok(Self {
            page: PageParams::new(pairs.get_u64("page")?, pairs.get_u64("limit")?),
            author: pairs.get_i32("author")?,
            tags: pairs.all("tags"),
            is_favorited: pairs.get_bool("is_favorited")?.unwrap_or(false),
            is_in_shopping_cart: pairs.get_bool("is_in_shopping_cart")?.unwrap_or(false),
            name: pairs.get("name").map(str::to_string),
        })
    }
}

/// Repository-level filter with viewer flags resolved to user IDs.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    pub author_id: Option<i32>,
    pub tag_slugs: Vec<String>,
    pub favorited_by: Option<i32>,
    pub in_cart_of: Option<i32>,
    pub name: Option<String>,
}
