//! Auth token factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Issues a token for the given user.
///
/// The key is unique per call and 40 characters long, matching the length of
/// keys issued by the login endpoint.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the user owning the token
///
/// # Returns
/// - `Ok(entity::auth_token::Model)` - Created token
/// - `Err(DbErr)` - Database error during insert
pub async fn create_token(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::auth_token::Model, DbErr> {
    let key = format!("{:0>40}", format!("testtoken{}", next_id()));

    entity::auth_token::ActiveModel {
        key: ActiveValue::Set(key),
        user_id: ActiveValue::Set(user_id),
        created: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
