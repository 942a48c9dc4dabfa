//! Tag repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::tag::{CreateTagParams, Tag};

pub struct TagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new tag.
    ///
    /// # Returns
    /// - `Ok(Tag)` - The created tag
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn create(&self, params: CreateTagParams) -> Result<Tag, DbErr> {
        let entity = entity::tag::ActiveModel {
            name: ActiveValue::Set(params.name),
            color: ActiveValue::Set(params.color),
            slug: ActiveValue::Set(params.slug),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Tag::from_entity(entity))
    }

    /// Gets every tag ordered by name. Tags are few, so the list is not paginated.
    pub async fn get_all(&self) -> Result<Vec<Tag>, DbErr> {
        let entities = entity::prelude::Tag::find()
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Tag::from_entity).collect())
    }

    pub async fn find_by_id(&self, tag_id: i32) -> Result<Option<Tag>, DbErr> {
        let entity = entity::prelude::Tag::find_by_id(tag_id).one(self.db).await?;

        Ok(entity.map(Tag::from_entity))
    }

    /// Loads the tags with the given IDs; unknown IDs are silently skipped.
    pub async fn find_by_ids(&self, tag_ids: &[i32]) -> Result<Vec<Tag>, DbErr> {
        if tag_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Tag::find()
            .filter(entity::tag::Column::Id.is_in(tag_ids.iter().copied()))
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Tag::from_entity).collect())
    }

    /// Lists which unique fields of `params` are already used by another tag.
    ///
    /// # Returns
    /// - `Ok(fields)` - Subset of `name`, `color`, `slug`; empty when the tag can be created
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_conflicts(&self, params: &CreateTagParams) -> Result<Vec<&'static str>, DbErr> {
        let existing = entity::prelude::Tag::find()
            .filter(
                Condition::any()
                    .add(entity::tag::Column::Name.eq(params.name.as_str()))
                    .add(entity::tag::Column::Color.eq(params.color.as_str()))
                    .add(entity::tag::Column::Slug.eq(params.slug.as_str())),
            )
            .all(self.db)
            .await?;

        let mut conflicts = Vec::new();
        if existing.iter().any(|t| t.name == params.name) {
            conflicts.push("name");
        }
        if existing.iter().any(|t| t.color.eq_ignore_ascii_case(&params.color)) {
            conflicts.push("color");
        }
        if existing.iter().any(|t| t.slug == params.slug) {
            conflicts.push("slug");
        }

        Ok(conflicts)
    }
}
