//! Favorite factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Adds a recipe to the user's favorites.
pub async fn create_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    recipe_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    entity::favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        recipe_id: ActiveValue::Set(recipe_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
