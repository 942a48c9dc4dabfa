//! Favorites and shopping cart.
//!
//! Both are per-user sets of recipes with identical rules: adding a recipe twice or
//! removing one that is not there is a client error, and a missing recipe is a 404.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        favorite::FavoriteRepository, recipe::RecipeRepository,
        shopping_cart::ShoppingCartRepository,
    },
    error::AppError,
    model::recipe::ShortRecipe,
};

/// Which per-user recipe collection an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Favorites,
    ShoppingCart,
}

impl Collection {
    fn label(&self) -> &'static str {
        match self {
            Self::Favorites => "favorites",
            Self::ShoppingCart => "shopping cart",
        }
    }
}

pub struct CollectionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CollectionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a recipe to one of the user's collections.
    ///
    /// # Returns
    /// - `Ok(ShortRecipe)` - The added recipe
    /// - `Err(AppError::NotFound)` - Recipe does not exist
    /// - `Err(AppError::BadRequest)` - Recipe is already in the collection
    pub async fn add(
        &self,
        collection: Collection,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<ShortRecipe, AppError> {
        let recipe = RecipeRepository::new(self.db)
            .get_short(recipe_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Recipe not found".to_string()))?;

        let duplicate = format!("Recipe is already in your {}", collection.label());
        if self.contains(collection, user_id, recipe_id).await? {
            return Err(AppError::BadRequest(duplicate));
        }

        let inserted = match collection {
            Collection::Favorites => FavoriteRepository::new(self.db).add(user_id, recipe_id).await,
            Collection::ShoppingCart => {
                ShoppingCartRepository::new(self.db)
                    .add(user_id, recipe_id)
                    .await
            }
        };
        inserted.map_err(|err| AppError::from_conflict(err, duplicate))?;

        tracing::debug!(
            "User {} added recipe {} to {}",
            user_id,
            recipe_id,
            collection.label()
        );

        Ok(recipe)
    }

    /// Removes a recipe from one of the user's collections.
    ///
    /// # Returns
    /// - `Ok(())` - Recipe removed
    /// - `Err(AppError::NotFound)` - Recipe does not exist
    /// - `Err(AppError::BadRequest)` - Recipe was not in the collection
    pub async fn remove(
        &self,
        collection: Collection,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<(), AppError> {
        if RecipeRepository::new(self.db)
            .get_author_id(recipe_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Recipe not found".to_string()));
        }

        let removed = match collection {
            Collection::Favorites => {
                FavoriteRepository::new(self.db)
                    .remove(user_id, recipe_id)
                    .await?
            }
            Collection::ShoppingCart => {
                ShoppingCartRepository::new(self.db)
                    .remove(user_id, recipe_id)
                    .await?
            }
        };

        if !removed {
            return Err(AppError::BadRequest(format!(
                "Recipe is not in your {}",
                collection.label()
            )));
        }

        Ok(())
    }

    async fn contains(
        &self,
        collection: Collection,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<bool, AppError> {
        let exists = match collection {
            Collection::Favorites => {
                FavoriteRepository::new(self.db)
                    .exists(user_id, recipe_id)
                    .await?
            }
            Collection::ShoppingCart => {
                ShoppingCartRepository::new(self.db)
                    .exists(user_id, recipe_id)
                    .await?
            }
        };

        Ok(exists)
    }
}
