//! Ingredient repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::ingredient::{CreateIngredientParams, Ingredient};

pub struct IngredientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IngredientRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateIngredientParams) -> Result<Ingredient, DbErr> {
        let entity = entity::ingredient::ActiveModel {
            name: ActiveValue::Set(params.name),
            measurement_unit: ActiveValue::Set(params.measurement_unit),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Ingredient::from_entity(entity))
    }

    /// Lists ingredients ordered by name, optionally restricted to a name prefix.
    ///
    /// Used by the recipe form autocomplete. Whether the prefix match is case
    /// sensitive depends on the database collation.
    ///
    /// # Arguments
    /// - `prefix` - Start of the ingredient name, `None` for every ingredient
    pub async fn search(&self, prefix: Option<&str>) -> Result<Vec<Ingredient>, DbErr> {
        let mut query = entity::prelude::Ingredient::find();
        if let Some(prefix) = prefix {
            query = query.filter(entity::ingredient::Column::Name.starts_with(prefix));
        }

        let entities = query
            .order_by_asc(entity::ingredient::Column::Name)
            .order_by_asc(entity::ingredient::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Ingredient::from_entity).collect())
    }

    pub async fn find_by_id(&self, ingredient_id: i32) -> Result<Option<Ingredient>, DbErr> {
        let entity = entity::prelude::Ingredient::find_by_id(ingredient_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Ingredient::from_entity))
    }

    /// Loads the ingredients with the given IDs; unknown IDs are silently skipped.
    pub async fn find_by_ids(&self, ingredient_ids: &[i32]) -> Result<Vec<Ingredient>, DbErr> {
        if ingredient_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Ingredient::find()
            .filter(entity::ingredient::Column::Id.is_in(ingredient_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Ingredient::from_entity).collect())
    }

    /// Checks whether an ingredient with the same name and unit already exists.
    pub async fn exists(&self, name: &str, measurement_unit: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Ingredient::find()
            .filter(entity::ingredient::Column::Name.eq(name))
            .filter(entity::ingredient::Column::MeasurementUnit.eq(measurement_unit))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
