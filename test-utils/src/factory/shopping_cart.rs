//! Shopping cart factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Adds a recipe to the user's shopping cart.
pub async fn create_shopping_cart_entry(
    db: &DatabaseConnection,
    user_id: i32,
    recipe_id: i32,
) -> Result<entity::shopping_cart::Model, DbErr> {
    entity::shopping_cart::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        recipe_id: ActiveValue::Set(recipe_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
