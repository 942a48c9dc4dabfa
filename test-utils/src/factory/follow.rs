//! Follow factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Subscribes `user_id` to `author_id`.
///
/// # Returns
/// - `Ok(entity::follow::Model)` - Created follow row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_follow(
    db: &DatabaseConnection,
    user_id: i32,
    author_id: i32,
) -> Result<entity::follow::Model, DbErr> {
    entity::follow::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        author_id: ActiveValue::Set(author_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
