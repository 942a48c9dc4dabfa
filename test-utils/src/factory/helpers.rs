//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a recipe together with its author, one tag and one ingredient.
///
/// This is a convenience method that creates:
/// 1. User (as recipe author)
/// 2. Tag
/// 3. Ingredient
/// 4. Recipe referencing the tag and the ingredient (amount 100)
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((author, tag, ingredient, recipe))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_recipe_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::tag::Model,
        entity::ingredient::Model,
        entity::recipe::Model,
    ),
    DbErr,
> {
    let author = crate::factory::user::create_user(db).await?;
    let tag = crate::factory::tag::create_tag(db).await?;
    let ingredient = crate::factory::ingredient::create_ingredient(db).await?;
    let recipe = crate::factory::recipe::RecipeFactory::new(db, author.id)
        .tag(tag.id)
        .ingredient(ingredient.id, 100)
        .build()
        .await?;

    Ok((author, tag, ingredient, recipe))
}

/// Creates a recipe authored by the provided user with a fresh tag and ingredient.
///
/// # Arguments
/// - `db` - Database connection
/// - `author` - User entity to use as recipe author
///
/// # Returns
/// - `Ok((tag, ingredient, recipe))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_recipe_for_user(
    db: &DatabaseConnection,
    author: &entity::user::Model,
) -> Result<
    (
        entity::tag::Model,
        entity::ingredient::Model,
        entity::recipe::Model,
    ),
    DbErr,
> {
    let tag = crate::factory::tag::create_tag(db).await?;
    let ingredient = crate::factory::ingredient::create_ingredient(db).await?;
    let recipe = crate::factory::recipe::RecipeFactory::new(db, author.id)
        .tag(tag.id)
        .ingredient(ingredient.id, 100)
        .build()
        .await?;

    Ok((tag, ingredient, recipe))
}
