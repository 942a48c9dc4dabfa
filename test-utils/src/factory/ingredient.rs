//! Ingredient factory for creating test ingredient entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test ingredients with customizable fields.
pub struct IngredientFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    measurement_unit: String,
}

impl<'a> IngredientFactory<'a> {
    /// Creates a new IngredientFactory with default values.
    ///
    /// Defaults:
    /// - name: `"ingredient {id}"`
    /// - measurement_unit: `"g"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("ingredient {}", id),
            measurement_unit: "g".to_string(),
        }
    }

    /// Sets the ingredient name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the measurement unit.
    pub fn measurement_unit(mut self, measurement_unit: impl Into<String>) -> Self {
        self.measurement_unit = measurement_unit.into();
        self
    }

    /// Builds and inserts the ingredient entity into the database.
    pub async fn build(self) -> Result<entity::ingredient::Model, DbErr> {
        entity::ingredient::ActiveModel {
            name: ActiveValue::Set(self.name),
            measurement_unit: ActiveValue::Set(self.measurement_unit),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an ingredient with default values.
pub async fn create_ingredient(
    db: &DatabaseConnection,
) -> Result<entity::ingredient::Model, DbErr> {
    IngredientFactory::new(db).build().await
}

/// Creates an ingredient with a specific name and unit.
pub async fn create_named_ingredient(
    db: &DatabaseConnection,
    name: impl Into<String>,
    measurement_unit: impl Into<String>,
) -> Result<entity::ingredient::Model, DbErr> {
    IngredientFactory::new(db)
        .name(name)
        .measurement_unit(measurement_unit)
        .build()
        .await
}
