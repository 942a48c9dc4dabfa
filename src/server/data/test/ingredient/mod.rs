use crate::server::{
    data::ingredient::IngredientRepository, model::ingredient::CreateIngredientParams,
};
use entity::prelude::Ingredient;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod search;
