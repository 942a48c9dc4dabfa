use crate::server::{
    data::recipe::RecipeRepository,
    model::recipe::{
        CreateRecipeParams, RecipeFields, RecipeFilter, RecipeIngredientParam, UpdateRecipeParams,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod get_shopping_cart_ingredients;
mod get_short_by_author;
mod update;

const IMAGE: &str = "data:image/png;base64,iVBORw0KGgo=";

fn fields(name: &str, tags: Vec<i32>, ingredients: Vec<(i32, i32)>) -> RecipeFields {
    RecipeFields {
        name: name.to_string(),
        text: "Mix and bake.".to_string(),
        cooking_time: 45,
        tags,
        ingredients: ingredients
            .into_iter()
            .map(|(ingredient_id, amount)| RecipeIngredientParam {
                ingredient_id,
                amount,
            })
            .collect(),
    }
}
