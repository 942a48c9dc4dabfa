//! Auth token repository.
//!
//! Each user holds at most one token. Login reuses an existing token and logout deletes it.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::user::User;

pub struct AuthTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthTokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the user's existing token key or stores `new_key` as their token.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the token
    /// - `new_key` - Key to store when the user has no token yet
    ///
    /// # Returns
    /// - `Ok(String)` - The key now associated with the user
    /// - `Err(DbErr)` - Database error during lookup or insert
    pub async fn get_or_create(&self, user_id: i32, new_key: String) -> Result<String, DbErr> {
        if let Some(existing) = entity::prelude::AuthToken::find()
            .filter(entity::auth_token::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        {
            return Ok(existing.key);
        }

        let token = entity::auth_token::ActiveModel {
            key: ActiveValue::Set(new_key),
            user_id: ActiveValue::Set(user_id),
            created: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(token.key)
    }

    /// Resolves a token key to the user owning it.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Token is valid
    /// - `Ok(None)` - No such token
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_user_by_key(&self, key: &str) -> Result<Option<User>, DbErr> {
        let result = entity::prelude::AuthToken::find_by_id(key.to_string())
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result
            .and_then(|(_, user)| user)
            .map(User::from_entity))
    }

    /// Deletes the user's token.
    ///
    /// # Returns
    /// - `Ok(true)` - A token was deleted
    /// - `Ok(false)` - The user had no token
    pub async fn delete_for_user(&self, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::AuthToken::delete_many()
            .filter(entity::auth_token::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
