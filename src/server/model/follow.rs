//! Subscription domain model.

use crate::{
    model::follow::{PaginatedSubscriptionsDto, SubscriptionDto},
    server::model::{pagination::Page, recipe::ShortRecipe, user::User},
};

/// A followed author with a preview of their newest recipes.
#[derive(Debug, Clone)]
pub struct Subscription {
    pub author: User,
    /// Newest first, truncated to the requested `recipes_limit`
    pub recipes: Vec<ShortRecipe>,
    /// Total number of recipes by the author, regardless of the preview size
    pub recipes_count: u64,
}

impl Subscription {
    pub fn into_dto(self) -> SubscriptionDto {
        SubscriptionDto {
            email: self.author.email,
            id: self.author.id,
            username: self.author.username,
            first_name: self.author.first_name,
            last_name: self.author.last_name,
            is_subscribed: true,
            recipes: self.recipes.into_iter().map(ShortRecipe::into_dto).collect(),
            recipes_count: self.recipes_count,
        }
    }
}

impl Page<Subscription> {
    pub fn into_dto(self) -> PaginatedSubscriptionsDto {
        PaginatedSubscriptionsDto {
            count: self.total,
            next: self.next(),
            previous: self.previous(),
            results: self.items.into_iter().map(Subscription::into_dto).collect(),
        }
    }
}
