use sea_orm::DatabaseConnection;

use crate::server::{
    data::ingredient::IngredientRepository,
    error::{validation::ValidationError, AppError},
    model::ingredient::{CreateIngredientParams, Ingredient},
};

pub struct IngredientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IngredientService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists ingredients whose name starts with `prefix`; a blank prefix lists all.
    pub async fn search(&self, prefix: Option<&str>) -> Result<Vec<Ingredient>, AppError> {
        let prefix = prefix.map(str::trim).filter(|p| !p.is_empty());

        Ok(IngredientRepository::new(self.db).search(prefix).await?)
    }

    pub async fn get_by_id(&self, ingredient_id: i32) -> Result<Option<Ingredient>, AppError> {
        Ok(IngredientRepository::new(self.db)
            .find_by_id(ingredient_id)
            .await?)
    }

    /// Creates an ingredient unless the same name and unit pair already exists.
    pub async fn create(&self, params: CreateIngredientParams) -> Result<Ingredient, AppError> {
        let repo = IngredientRepository::new(self.db);

        if repo.exists(&params.name, &params.measurement_unit).await? {
            return Err(ValidationError::field(
                "name",
                "An ingredient with this name and measurement unit already exists.",
            )
            .into());
        }

        let ingredient = repo.create(params).await?;

        tracing::info!("Created ingredient {} ({})", ingredient.id, ingredient.name);

        Ok(ingredient)
    }
}
