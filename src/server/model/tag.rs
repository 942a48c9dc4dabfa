//! Tag domain model and creation parameters.

use crate::{
    model::tag::{CreateTagDto, TagDto},
    server::{
        error::validation::ValidationError,
        util::validate::{self, MAX_TAG_FIELD_LENGTH},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: i32,
    pub name: String,
    pub color: String,
    pub slug: String,
}

impl Tag {
    pub fn from_entity(entity: entity::tag::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            color: entity.color,
            slug: entity.slug,
        }
    }

    pub fn into_dto(self) -> TagDto {
        TagDto {
            id: self.id,
            name: self.name,
            color: self.color,
            slug: self.slug,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTagParams {
    pub name: String,
    /// Normalized to upper case, e.g. `#E26C2D`
    pub color: String,
    pub slug: String,
}

impl CreateTagParams {
    pub fn from_dto(dto: CreateTagDto) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();

        let name = validate::required_text(&mut errors, "name", dto.name, MAX_TAG_FIELD_LENGTH);
        let color = validate::required_text(&mut errors, "color", dto.color, 7)
            .filter(|color| validate::color(&mut errors, "color", color))
            .map(|color| color.to_uppercase());
        let slug = validate::required_text(&mut errors, "slug", dto.slug, MAX_TAG_FIELD_LENGTH)
            .filter(|slug| validate::slug(&mut errors, "slug", slug));

        match (name, color, slug) {
            (Some(name), Some(color), Some(slug)) => Ok(Self { name, color, slug }),
            _ => Err(errors),
        }
    }
}
