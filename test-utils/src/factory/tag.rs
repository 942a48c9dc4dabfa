//! Tag factory for creating test tag entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tags with customizable fields.
pub struct TagFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    color: String,
    slug: String,
}

impl<'a> TagFactory<'a> {
    /// Creates a new TagFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Tag {id}"`
    /// - color: `"#{id:06X}"`, unique per factory call
    /// - slug: `"tag-{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Tag {}", id),
            color: format!("#{:06X}", id & 0xFF_FFFF),
            slug: format!("tag-{}", id),
        }
    }

    /// Sets the tag name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the tag color in `#RRGGBB` form.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the tag slug.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Builds and inserts the tag entity into the database.
    pub async fn build(self) -> Result<entity::tag::Model, DbErr> {
        entity::tag::ActiveModel {
            name: ActiveValue::Set(self.name),
            color: ActiveValue::Set(self.color),
            slug: ActiveValue::Set(self.slug),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tag with default values.
pub async fn create_tag(db: &DatabaseConnection) -> Result<entity::tag::Model, DbErr> {
    TagFactory::new(db).build().await
}

/// Creates a tag with a specific slug.
pub async fn create_tag_with_slug(
    db: &DatabaseConnection,
    slug: impl Into<String>,
) -> Result<entity::tag::Model, DbErr> {
    TagFactory::new(db).slug(slug).build().await
}
