//! Loads reference tags and ingredients from JSON files.
//!
//! `DATA_DIR/tags.json` holds `[{"name", "color", "slug"}]` and
//! `DATA_DIR/ingredients.json` holds `[{"name", "measurement_unit"}]`. Rows that already
//! exist or fail validation are skipped, so seeding can run on every start.

use std::path::Path;

use sea_orm::DatabaseConnection;
use serde::de::DeserializeOwned;

use crate::{
    model::{ingredient::CreateIngredientDto, tag::CreateTagDto},
    server::{
        data::{ingredient::IngredientRepository, tag::TagRepository},
        error::{internal::InternalError, AppError},
        model::{ingredient::CreateIngredientParams, tag::CreateTagParams},
    },
};

pub const TAGS_FILE: &str = "tags.json";
pub const INGREDIENTS_FILE: &str = "ingredients.json";

/// Number of rows inserted from each file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub tags: usize,
    pub ingredients: usize,
}

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Seeds every file present in `data_dir`; missing files are skipped.
    pub async fn seed_from_dir(&self, data_dir: &Path) -> Result<SeedReport, AppError> {
        let mut report = SeedReport::default();

        if let Some(tags) = read_json::<CreateTagDto>(&data_dir.join(TAGS_FILE)).await? {
            report.tags = self.seed_tags(tags).await?;
        }
        if let Some(ingredients) =
            read_json::<CreateIngredientDto>(&data_dir.join(INGREDIENTS_FILE)).await?
        {
            report.ingredients = self.seed_ingredients(ingredients).await?;
        }

        Ok(report)
    }

    pub async fn seed_tags(&self, tags: Vec<CreateTagDto>) -> Result<usize, AppError> {
        let repo = TagRepository::new(self.db);
        let mut inserted = 0;

        for dto in tags {
            let params = match CreateTagParams::from_dto(dto) {
                Ok(params) => params,
                Err(err) => {
                    tracing::warn!("Skipping invalid seed tag: {}", err);
                    continue;
                }
            };
            if !repo.find_conflicts(&params).await?.is_empty() {
                continue;
            }
            repo.create(params).await?;
            inserted += 1;
        }

        Ok(inserted)
    }

    pub async fn seed_ingredients(
        &self,
        ingredients: Vec<CreateIngredientDto>,
    ) -> Result<usize, AppError> {
        let repo = IngredientRepository::new(self.db);
        let mut inserted = 0;

        for dto in ingredients {
            let params = match CreateIngredientParams::from_dto(dto) {
                Ok(params) => params,
                Err(err) => {
                    tracing::warn!("Skipping invalid seed ingredient: {}", err);
                    continue;
                }
            };
            if repo.exists(&params.name, &params.measurement_unit).await? {
                continue;
            }
            repo.create(params).await?;
            inserted += 1;
        }

        Ok(inserted)
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<Vec<T>>, AppError> {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("Seed file {} not found, skipping", path.display());
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };

    let rows = serde_json::from_str(&contents).map_err(|source| InternalError::SeedData {
        path: path.display().to_string(),
        source,
    })?;

    Ok(Some(rows))
}
