use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        favorite::FavoriteRepository, follow::FollowRepository,
        ingredient::IngredientRepository, recipe::RecipeRepository,
        shopping_cart::ShoppingCartRepository, tag::TagRepository,
    },
    error::{validation::ValidationError, AppError},
    model::{
        pagination::Page,
        recipe::{
            CreateRecipeParams, Recipe, RecipeFields, RecipeFilter, RecipeListQuery, RecipeView,
            RecipeWithRelations, UpdateRecipeParams,
        },
    },
};

/// Service for recipe CRUD and listing.
///
/// Every read returns `RecipeView`s, i.e. recipes decorated with the viewer's favorite,
/// shopping cart and author subscription flags.
pub struct RecipeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecipeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a recipe for `params.author_id`.
    ///
    /// # Returns
    /// - `Ok(RecipeView)` - The created recipe as seen by its author
    /// - `Err(AppError::ValidationErr)` - A referenced tag or ingredient does not exist
    /// - `Err(AppError::DbErr)` - Database error, nothing was written
    pub async fn create(&self, params: CreateRecipeParams) -> Result<RecipeView, AppError> {
        self.check_references(&params.fields).await?;

        let author_id = params.author_id;
        let recipe_id = RecipeRepository::new(self.db).create(params).await?;

        tracing::info!("User {} created recipe {}", author_id, recipe_id);

        self.get_by_id(recipe_id, Some(author_id))
            .await?
            .ok_or_else(|| AppError::NotFound("Recipe not found after creation".to_string()))
    }

    /// Updates a recipe, replacing its tags and ingredients.
    ///
    /// Ownership is checked by the caller.
    pub async fn update(
        &self,
        params: UpdateRecipeParams,
        viewer_id: i32,
    ) -> Result<RecipeView, AppError> {
        self.check_references(&params.fields).await?;

        let recipe_id = params.id;
        if !RecipeRepository::new(self.db).update(params).await? {
            return Err(AppError::NotFound("Recipe not found".to_string()));
        }

        tracing::info!("User {} updated recipe {}", viewer_id, recipe_id);

        self.get_by_id(recipe_id, Some(viewer_id))
            .await?
            .ok_or_else(|| AppError::NotFound("Recipe not found".to_string()))
    }

    /// Deletes a recipe. Ownership is checked by the caller.
    pub async fn delete(&self, recipe_id: i32) -> Result<(), AppError> {
        if !RecipeRepository::new(self.db).delete(recipe_id).await? {
            return Err(AppError::NotFound("Recipe not found".to_string()));
        }

        tracing::info!("Deleted recipe {}", recipe_id);

        Ok(())
    }

    pub async fn get_by_id(
        &self,
        recipe_id: i32,
        viewer_id: Option<i32>,
    ) -> Result<Option<RecipeView>, AppError> {
        let Some(rows) = RecipeRepository::new(self.db).get_by_id(recipe_id).await? else {
            return Ok(None);
        };

        Ok(self.into_views(vec![rows], viewer_id).await?.pop())
    }

    /// Lists recipes matching the query, newest first.
    ///
    /// The favorited and shopping cart filters only make sense for a signed-in viewer;
    /// for anonymous visitors they match nothing.
    pub async fn get_paginated(
        &self,
        query: RecipeListQuery,
        viewer_id: Option<i32>,
    ) -> Result<Page<RecipeView>, AppError> {
        if viewer_id.is_none() && (query.is_favorited || query.is_in_shopping_cart) {
            return Ok(Page::empty(query.page));
        }

        let filter = RecipeFilter {
            author_id: query.author,
            tag_slugs: query.tags,
            favorited_by: viewer_id.filter(|_| query.is_favorited),
            in_cart_of: viewer_id.filter(|_| query.is_in_shopping_cart),
            name: query.name,
        };

        let (rows, total) = RecipeRepository::new(self.db)
            .get_paginated(&filter, query.page.index(), query.page.limit)
            .await?;

        let views = self.into_views(rows, viewer_id).await?;

        Ok(Page::new(views, total, query.page))
    }

    /// Fails with per-field messages for every tag or ingredient ID that does not exist.
    async fn check_references(&self, fields: &RecipeFields) -> Result<(), AppError> {
        let mut errors = ValidationError::new();

        let found_tags: HashSet<i32> = TagRepository::new(self.db)
            .find_by_ids(&fields.tags)
            .await?
            .into_iter()
            .map(|tag| tag.id)
            .collect();
        for tag_id in fields.tags.iter().filter(|id| !found_tags.contains(*id)) {
            errors.add("tags", format!("Tag with id {} does not exist.", tag_id));
        }

        let ingredient_ids: Vec<i32> = fields.ingredients.iter().map(|i| i.ingredient_id).collect();
        let found_ingredients: HashSet<i32> = IngredientRepository::new(self.db)
            .find_by_ids(&ingredient_ids)
            .await?
            .into_iter()
            .map(|ingredient| ingredient.id)
            .collect();
        for ingredient_id in ingredient_ids.iter().filter(|id| !found_ingredients.contains(*id)) {
            errors.add(
                "ingredients",
                format!("Ingredient with id {} does not exist.", ingredient_id),
            );
        }

        Ok(errors.into_result()?)
    }

    async fn into_views(
        &self,
        rows: Vec<RecipeWithRelations>,
        viewer_id: Option<i32>,
    ) -> Result<Vec<RecipeView>, AppError> {
        let recipes: Vec<Recipe> = rows.into_iter().map(Recipe::from_with_relations).collect();

        let Some(viewer_id) = viewer_id else {
            return Ok(recipes.into_iter().map(RecipeView::anonymous).collect());
        };

        let recipe_ids: Vec<i32> = recipes.iter().map(|r| r.id).collect();
        let author_ids: Vec<i32> = recipes.iter().map(|r| r.author.id).collect();

        let favorited = FavoriteRepository::new(self.db)
            .favorited_among(viewer_id, &recipe_ids)
            .await?;
        let carted = ShoppingCartRepository::new(self.db)
            .carted_among(viewer_id, &recipe_ids)
            .await?;
        let followed = FollowRepository::new(self.db)
            .followed_among(viewer_id, &author_ids)
            .await?;

        Ok(recipes
            .into_iter()
            .map(|recipe| RecipeView {
                is_favorited: favorited.contains(&recipe.id),
                is_in_shopping_cart: carted.contains(&recipe.id),
                author_subscribed: followed.contains(&recipe.author.id),
                recipe,
            })
            .collect())
    }
}
