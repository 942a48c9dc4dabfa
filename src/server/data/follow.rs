//! Follow (subscription) repository.

use std::collections::HashSet;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::User;

pub struct FollowRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FollowRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Subscribes `user_id` to `author_id`.
    ///
    /// Callers check for self-follows and duplicates beforehand.
    pub async fn create(&self, user_id: i32, author_id: i32) -> Result<(), DbErr> {
        entity::follow::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            author_id: ActiveValue::Set(author_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes a subscription.
    ///
    /// # Returns
    /// - `Ok(true)` - Subscription removed
    /// - `Ok(false)` - `user_id` was not subscribed to `author_id`
    pub async fn delete(&self, user_id: i32, author_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Follow::delete_many()
            .filter(entity::follow::Column::UserId.eq(user_id))
            .filter(entity::follow::Column::AuthorId.eq(author_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, user_id: i32, author_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Follow::find()
            .filter(entity::follow::Column::UserId.eq(user_id))
            .filter(entity::follow::Column::AuthorId.eq(author_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Returns which of `author_ids` the user follows.
    pub async fn followed_among(
        &self,
        user_id: i32,
        author_ids: &[i32],
    ) -> Result<HashSet<i32>, DbErr> {
        if author_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let follows = entity::prelude::Follow::find()
            .filter(entity::follow::Column::UserId.eq(user_id))
            .filter(entity::follow::Column::AuthorId.is_in(author_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(follows.into_iter().map(|f| f.author_id).collect())
    }

    /// Gets the authors a user follows, in the order they were followed.
    ///
    /// # Arguments
    /// - `user_id` - The follower
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of authors per page
    ///
    /// # Returns
    /// - `Ok((authors, total))` - Authors for the requested page and total follow count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_authors_paginated(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::Follow::find()
            .filter(entity::follow::Column::UserId.eq(user_id))
            .order_by_asc(entity::follow::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let follows = paginator.fetch_page(page).await?;

        let author_ids: Vec<i32> = follows.iter().map(|f| f.author_id).collect();
        if author_ids.is_empty() {
            return Ok((Vec::new(), total));
        }

        let mut authors = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(author_ids.clone()))
            .all(self.db)
            .await?;
        authors.sort_by_key(|a| author_ids.iter().position(|id| *id == a.id));

        Ok((authors.into_iter().map(User::from_entity).collect(), total))
    }
}
