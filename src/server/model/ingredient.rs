//! Ingredient domain model and creation parameters.

use crate::{
    model::ingredient::{CreateIngredientDto, IngredientDto},
    server::{
        error::validation::ValidationError,
        util::validate::{self, MAX_TAG_FIELD_LENGTH},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub id: i32,
    pub name: String,
    pub measurement_unit: String,
}

impl Ingredient {
    pub fn from_entity(entity: entity::ingredient::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            measurement_unit: entity.measurement_unit,
        }
    }

    pub fn into_dto(self) -> IngredientDto {
        IngredientDto {
            id: self.id,
            name: self.name,
            measurement_unit: self.measurement_unit,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateIngredientParams {
    pub name: String,
    pub measurement_unit: String,
}

impl CreateIngredientParams {
    pub fn from_dto(dto: CreateIngredientDto) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();

        let name = validate::required_text(&mut errors, "name", dto.name, MAX_TAG_FIELD_LENGTH);
        let measurement_unit = validate::required_text(
            &mut errors,
            "measurement_unit",
            dto.measurement_unit,
            MAX_TAG_FIELD_LENGTH,
        );

        match (name, measurement_unit) {
            (Some(name), Some(measurement_unit)) => Ok(Self {
                name,
                measurement_unit,
            }),
            _ => Err(errors),
        }
    }
}
