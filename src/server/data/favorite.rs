//! Favorite recipes repository.

use std::collections::HashSet;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn add(&self, user_id: i32, recipe_id: i32) -> Result<(), DbErr> {
        entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            recipe_id: ActiveValue::Set(recipe_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// # Returns
    /// - `Ok(true)` - Recipe removed from favorites
    /// - `Ok(false)` - Recipe was not a favorite
    pub async fn remove(&self, user_id: i32, recipe_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::RecipeId.eq(recipe_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, user_id: i32, recipe_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::RecipeId.eq(recipe_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Returns which of `recipe_ids` the user has favorited.
    pub async fn favorited_among(
        &self,
        user_id: i32,
        recipe_ids: &[i32],
    ) -> Result<HashSet<i32>, DbErr> {
        if recipe_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let rows = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::RecipeId.is_in(recipe_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|r| r.recipe_id).collect())
    }
}
