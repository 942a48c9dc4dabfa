use sea_orm::DatabaseConnection;

use crate::server::{
    data::{follow::FollowRepository, recipe::RecipeRepository, user::UserRepository},
    error::AppError,
    model::{
        follow::Subscription,
        pagination::{Page, PageParams},
        user::User,
    },
};

const ALREADY_SUBSCRIBED: &str = "You are already subscribed to this user";

pub struct FollowService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FollowService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Subscribes `user_id` to `author_id`.
    ///
    /// # Arguments
    /// - `recipes_limit` - Size of the recipe preview in the returned subscription
    ///
    /// # Returns
    /// - `Ok(Subscription)` - The new subscription
    /// - `Err(AppError::NotFound)` - Author does not exist
    /// - `Err(AppError::BadRequest)` - Following oneself or already subscribed
    pub async fn subscribe(
        &self,
        user_id: i32,
        author_id: i32,
        recipes_limit: Option<u64>,
    ) -> Result<Subscription, AppError> {
        let author = UserRepository::new(self.db)
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if user_id == author_id {
            return Err(AppError::BadRequest(
                "You cannot subscribe to yourself".to_string(),
            ));
        }

        let repo = FollowRepository::new(self.db);
        if repo.exists(user_id, author_id).await? {
            return Err(AppError::BadRequest(ALREADY_SUBSCRIBED.to_string()));
        }

        repo.create(user_id, author_id)
            .await
            .map_err(|err| AppError::from_conflict(err, ALREADY_SUBSCRIBED))?;

        tracing::debug!("User {} subscribed to {}", user_id, author_id);

        self.build_subscription(author, recipes_limit).await
    }

    /// Removes a subscription.
    ///
    /// # Returns
    /// - `Ok(())` - Subscription removed
    /// - `Err(AppError::NotFound)` - Author does not exist
    /// - `Err(AppError::BadRequest)` - Not subscribed
    pub async fn unsubscribe(&self, user_id: i32, author_id: i32) -> Result<(), AppError> {
        if UserRepository::new(self.db)
            .find_by_id(author_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        if !FollowRepository::new(self.db)
            .delete(user_id, author_id)
            .await?
        {
            return Err(AppError::BadRequest(
                "You are not subscribed to this user".to_string(),
            ));
        }

        tracing::debug!("User {} unsubscribed from {}", user_id, author_id);

        Ok(())
    }

    /// Gets a page of the user's subscriptions, each with a recipe preview.
    pub async fn get_paginated(
        &self,
        user_id: i32,
        page: PageParams,
        recipes_limit: Option<u64>,
    ) -> Result<Page<Subscription>, AppError> {
        let (authors, total) = FollowRepository::new(self.db)
            .get_authors_paginated(user_id, page.index(), page.limit)
            .await?;

        let mut subscriptions = Vec::with_capacity(authors.len());
        for author in authors {
            subscriptions.push(self.build_subscription(author, recipes_limit).await?);
        }

        Ok(Page::new(subscriptions, total, page))
    }

    async fn build_subscription(
        &self,
        author: User,
        recipes_limit: Option<u64>,
    ) -> Result<Subscription, AppError> {
        let repo = RecipeRepository::new(self.db);

        let recipes = repo.get_short_by_author(author.id, recipes_limit).await?;
        let recipes_count = repo.count_by_author(author.id).await?;

        Ok(Subscription {
            author,
            recipes,
            recipes_count,
        })
    }
}
