//! SeaORM entities for the Foodgram schema.
//!
//! Table layout mirrors the `migration` crate; the test-utils crate builds
//! in-memory SQLite tables straight from these definitions.

pub mod prelude;

pub mod auth_token;
pub mod favorite;
pub mod follow;
pub mod ingredient;
pub mod recipe;
pub mod recipe_ingredient;
pub mod recipe_tag;
pub mod shopping_cart;
pub mod tag;
pub mod user;
