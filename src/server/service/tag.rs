use sea_orm::DatabaseConnection;

use crate::server::{
    data::tag::TagRepository,
    error::{validation::ValidationError, AppError},
    model::tag::{CreateTagParams, Tag},
};

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Tag>, AppError> {
        Ok(TagRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, tag_id: i32) -> Result<Option<Tag>, AppError> {
        Ok(TagRepository::new(self.db).find_by_id(tag_id).await?)
    }

    /// Creates a tag, reporting every unique field already taken by another tag.
    pub async fn create(&self, params: CreateTagParams) -> Result<Tag, AppError> {
        let repo = TagRepository::new(self.db);

        let conflicts = repo.find_conflicts(&params).await?;
        if !conflicts.is_empty() {
            let mut errors = ValidationError::new();
            for field in conflicts {
                errors.add(field, format!("A tag with this {} already exists.", field));
            }
            return Err(errors.into());
        }

        let tag = repo.create(params).await?;

        tracing::info!("Created tag {} ({})", tag.id, tag.slug);

        Ok(tag)
    }
}
