//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories handle foreign key relationships where a default
//! is obvious, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let tag = factory::tag::create_tag(&db).await?;
//!
//!     // Recipe with one tag and one ingredient owned by a fresh user
//!     let (author, tag, ingredient, recipe) =
//!         factory::helpers::create_recipe_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("chef@example.com")
//!     .username("chef")
//!     .admin(true)
//!     .build()
//!     .await?;
//!
//! let recipe = factory::recipe::RecipeFactory::new(&db, user.id)
//!     .name("Borscht")
//!     .tag(tag.id)
//!     .ingredient(beet.id, 300)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `auth_token` - Issue auth tokens for users
//! - `tag` - Create tag entities
//! - `ingredient` - Create ingredient entities
//! - `recipe` - Create recipes with tag and ingredient rows
//! - `follow` - Create follow relationships
//! - `favorite` - Add recipes to a user's favorites
//! - `shopping_cart` - Add recipes to a user's shopping cart
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod auth_token;
pub mod favorite;
pub mod follow;
pub mod helpers;
pub mod ingredient;
pub mod recipe;
pub mod shopping_cart;
pub mod tag;
pub mod user;

pub use auth_token::create_token;
pub use favorite::create_favorite;
pub use follow::create_follow;
pub use ingredient::create_ingredient;
pub use recipe::create_recipe;
pub use shopping_cart::create_shopping_cart_entry;
pub use tag::create_tag;
pub use user::create_user;
