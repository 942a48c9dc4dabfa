//! Recipe factory for creating test recipes with their tag and ingredient rows.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Smallest valid data URI (1x1 transparent PNG).
pub const TEST_IMAGE: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

/// Factory for creating test recipes with customizable fields.
///
/// Tag and ingredient rows are inserted after the recipe itself; the referenced
/// tags and ingredients must already exist.
///
/// # Example
///
/// ```rust,ignore
/// let recipe = RecipeFactory::new(&db, author.id)
///     .name("Pancakes")
///     .tag(breakfast.id)
///     .ingredient(flour.id, 200)
///     .ingredient(milk.id, 300)
///     .build()
///     .await?;
/// ```
pub struct RecipeFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    name: String,
    image: String,
    text: String,
    cooking_time: i32,
    pub_date: DateTime<Utc>,
    tags: Vec<i32>,
    ingredients: Vec<(i32, i32)>,
}

impl<'a> RecipeFactory<'a> {
    /// Creates a new RecipeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Recipe {id}"`
    /// - image: [`TEST_IMAGE`]
    /// - text: `"Test recipe description"`
    /// - cooking_time: `30`
    /// - pub_date: now
    /// - no tags, no ingredients
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            name: format!("Recipe {}", id),
            image: TEST_IMAGE.to_string(),
            text: "Test recipe description".to_string(),
            cooking_time: 30,
            pub_date: Utc::now(),
            tags: Vec::new(),
            ingredients: Vec::new(),
        }
    }

    /// Sets the recipe name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the recipe description.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the cooking time in minutes.
    pub fn cooking_time(mut self, cooking_time: i32) -> Self {
        self.cooking_time = cooking_time;
        self
    }

    /// Sets the publication timestamp.
    pub fn pub_date(mut self, pub_date: DateTime<Utc>) -> Self {
        self.pub_date = pub_date;
        self
    }

    /// Attaches an existing tag to the recipe.
    pub fn tag(mut self, tag_id: i32) -> Self {
        self.tags.push(tag_id);
        self
    }

    /// Attaches an existing ingredient with the given amount.
    pub fn ingredient(mut self, ingredient_id: i32, amount: i32) -> Self {
        self.ingredients.push((ingredient_id, amount));
        self
    }

    /// Builds and inserts the recipe and its relation rows.
    ///
    /// # Returns
    /// - `Ok(entity::recipe::Model)` - Created recipe entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::recipe::Model, DbErr> {
        let recipe = entity::recipe::ActiveModel {
            author_id: ActiveValue::Set(self.author_id),
            name: ActiveValue::Set(self.name),
            image: ActiveValue::Set(self.image),
            text: ActiveValue::Set(self.text),
            cooking_time: ActiveValue::Set(self.cooking_time),
            pub_date: ActiveValue::Set(self.pub_date),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for tag_id in self.tags {
            entity::recipe_tag::ActiveModel {
                recipe_id: ActiveValue::Set(recipe.id),
                tag_id: ActiveValue::Set(tag_id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        for (ingredient_id, amount) in self.ingredients {
            entity::recipe_ingredient::ActiveModel {
                recipe_id: ActiveValue::Set(recipe.id),
                ingredient_id: ActiveValue::Set(ingredient_id),
                amount: ActiveValue::Set(amount),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(recipe)
    }
}

/// Creates a recipe without tags or ingredients for the given author.
pub async fn create_recipe(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::recipe::Model, DbErr> {
    RecipeFactory::new(db, author_id).build().await
}
