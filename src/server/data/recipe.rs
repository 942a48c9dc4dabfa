//! Recipe repository.
//!
//! A recipe spans the `recipe` row plus its `recipe_tag` and `recipe_ingredient` link rows.
//! Writes touching several of those tables run inside a single transaction. Reads load a
//! page of recipe rows first and then fetch the related authors, tags and ingredients for
//! the whole page in batch queries, assembling them into `RecipeWithRelations`.

use std::collections::{BTreeSet, HashMap};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
    TransactionTrait,
};

use crate::server::model::recipe::{
    CreateRecipeParams, RecipeFilter, RecipeIngredientParam, RecipeWithRelations, ShortRecipe,
    UpdateRecipeParams,
};

pub struct RecipeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecipeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a recipe with its tag and ingredient rows in one transaction.
    ///
    /// Tag and ingredient IDs must already be known to exist.
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the created recipe
    /// - `Err(DbErr)` - Database error; nothing is written in that case
    pub async fn create(&self, params: CreateRecipeParams) -> Result<i32, DbErr> {
        let txn = self.db.begin().await?;

        let recipe = entity::recipe::ActiveModel {
            author_id: ActiveValue::Set(params.author_id),
            name: ActiveValue::Set(params.fields.name),
            image: ActiveValue::Set(params.image),
            text: ActiveValue::Set(params.fields.text),
            cooking_time: ActiveValue::Set(params.fields.cooking_time),
            pub_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        Self::insert_relations(&txn, recipe.id, &params.fields.tags, &params.fields.ingredients)
            .await?;

        txn.commit().await?;

        Ok(recipe.id)
    }

    /// Updates a recipe and replaces all of its tags and ingredients.
    ///
    /// # Returns
    /// - `Ok(true)` - Recipe updated
    /// - `Ok(false)` - No recipe with that ID
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn update(&self, params: UpdateRecipeParams) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let Some(recipe) = entity::prelude::Recipe::find_by_id(params.id)
            .one(&txn)
            .await?
        else {
            return Ok(false);
        };

        let mut active = recipe.into_active_model();
        active.name = ActiveValue::Set(params.fields.name);
        active.text = ActiveValue::Set(params.fields.text);
        active.cooking_time = ActiveValue::Set(params.fields.cooking_time);
        if let Some(image) = params.image {
            active.image = ActiveValue::Set(image);
        }
        active.update(&txn).await?;

        entity::prelude::RecipeTag::delete_many()
            .filter(entity::recipe_tag::Column::RecipeId.eq(params.id))
            .exec(&txn)
            .await?;
        entity::prelude::RecipeIngredient::delete_many()
            .filter(entity::recipe_ingredient::Column::RecipeId.eq(params.id))
            .exec(&txn)
            .await?;

        Self::insert_relations(&txn, params.id, &params.fields.tags, &params.fields.ingredients)
            .await?;

        txn.commit().await?;

        Ok(true)
    }

    /// Deletes a recipe together with every row referencing it.
    ///
    /// # Returns
    /// - `Ok(true)` - Recipe deleted
    /// - `Ok(false)` - No recipe with that ID
    pub async fn delete(&self, recipe_id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::RecipeTag::delete_many()
            .filter(entity::recipe_tag::Column::RecipeId.eq(recipe_id))
            .exec(&txn)
            .await?;
        entity::prelude::RecipeIngredient::delete_many()
            .filter(entity::recipe_ingredient::Column::RecipeId.eq(recipe_id))
            .exec(&txn)
            .await?;
        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::RecipeId.eq(recipe_id))
            .exec(&txn)
            .await?;
        entity::prelude::ShoppingCart::delete_many()
            .filter(entity::shopping_cart::Column::RecipeId.eq(recipe_id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Recipe::delete_by_id(recipe_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Returns the author of a recipe, used for ownership checks.
    pub async fn get_author_id(&self, recipe_id: i32) -> Result<Option<i32>, DbErr> {
        let recipe = entity::prelude::Recipe::find_by_id(recipe_id)
            .one(self.db)
            .await?;

        Ok(recipe.map(|r| r.author_id))
    }

    /// Gets a recipe with all related rows.
    pub async fn get_by_id(&self, recipe_id: i32) -> Result<Option<RecipeWithRelations>, DbErr> {
        let Some(recipe) = entity::prelude::Recipe::find_by_id(recipe_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.load_relations(vec![recipe]).await?.pop())
    }

    /// Gets the compact representation of a recipe.
    pub async fn get_short(&self, recipe_id: i32) -> Result<Option<ShortRecipe>, DbErr> {
        let recipe = entity::prelude::Recipe::find_by_id(recipe_id)
            .one(self.db)
            .await?;

        Ok(recipe.map(ShortRecipe::from_entity))
    }

    /// Gets a filtered page of recipes, newest first.
    ///
    /// # Arguments
    /// - `filter` - Conditions combined with AND; tag slugs match any of the given tags
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of recipes per page
    ///
    /// # Returns
    /// - `Ok((recipes, total))` - Recipes for the requested page and total matching count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        filter: &RecipeFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<RecipeWithRelations>, u64), DbErr> {
        let query = self.filtered_query(filter).await?;

        let paginator = query
            .order_by_desc(entity::recipe::Column::PubDate)
            .order_by_desc(entity::recipe::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let recipes = paginator.fetch_page(page).await?;

        Ok((self.load_relations(recipes).await?, total))
    }

    /// Gets an author's newest recipes in compact form.
    ///
    /// # Arguments
    /// - `author_id` - Author whose recipes to list
    /// - `limit` - Maximum number of recipes, `None` for all of them
    pub async fn get_short_by_author(
        &self,
        author_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<ShortRecipe>, DbErr> {
        let mut query = entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::AuthorId.eq(author_id))
            .order_by_desc(entity::recipe::Column::PubDate)
            .order_by_desc(entity::recipe::Column::Id);
        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        let recipes = query.all(self.db).await?;

        Ok(recipes.into_iter().map(ShortRecipe::from_entity).collect())
    }

    pub async fn count_by_author(&self, author_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::AuthorId.eq(author_id))
            .count(self.db)
            .await
    }

    /// Gets `(ingredient name, measurement unit, amount)` for every ingredient row of
    /// every recipe in the user's shopping cart. Rows are not aggregated.
    pub async fn get_shopping_cart_ingredients(
        &self,
        user_id: i32,
    ) -> Result<Vec<(String, String, i32)>, DbErr> {
        let recipe_ids: Vec<i32> = entity::prelude::ShoppingCart::find()
            .filter(entity::shopping_cart::Column::UserId.eq(user_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|entry| entry.recipe_id)
            .collect();

        if recipe_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::RecipeIngredient::find()
            .filter(entity::recipe_ingredient::Column::RecipeId.is_in(recipe_ids))
            .find_also_related(entity::prelude::Ingredient)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(link, ingredient)| {
                ingredient.map(|i| (i.name, i.measurement_unit, link.amount))
            })
            .collect())
    }

    async fn insert_relations<C: ConnectionTrait>(
        conn: &C,
        recipe_id: i32,
        tag_ids: &[i32],
        ingredients: &[RecipeIngredientParam],
    ) -> Result<(), DbErr> {
        for tag_id in tag_ids {
            entity::recipe_tag::ActiveModel {
                recipe_id: ActiveValue::Set(recipe_id),
                tag_id: ActiveValue::Set(*tag_id),
                ..Default::default()
            }
            .insert(conn)
            .await?;
        }

        for item in ingredients {
            entity::recipe_ingredient::ActiveModel {
                recipe_id: ActiveValue::Set(recipe_id),
                ingredient_id: ActiveValue::Set(item.ingredient_id),
                amount: ActiveValue::Set(item.amount),
                ..Default::default()
            }
            .insert(conn)
            .await?;
        }

        Ok(())
    }

    /// Builds the recipe query for a filter.
    ///
    /// Relation-based conditions are resolved to recipe ID sets first, which keeps the
    /// main query free of joins and therefore of duplicate rows.
    async fn filtered_query(
        &self,
        filter: &RecipeFilter,
    ) -> Result<Select<entity::recipe::Entity>, DbErr> {
        let mut query = entity::prelude::Recipe::find();

        if let Some(author_id) = filter.author_id {
            query = query.filter(entity::recipe::Column::AuthorId.eq(author_id));
        }

        if let Some(name) = filter.name.as_deref() {
            query = query.filter(entity::recipe::Column::Name.contains(name));
        }

        if !filter.tag_slugs.is_empty() {
            let tag_ids: Vec<i32> = entity::prelude::Tag::find()
                .filter(entity::tag::Column::Slug.is_in(filter.tag_slugs.iter().cloned()))
                .all(self.db)
                .await?
                .into_iter()
                .map(|tag| tag.id)
                .collect();

            let recipe_ids: BTreeSet<i32> = entity::prelude::RecipeTag::find()
                .filter(entity::recipe_tag::Column::TagId.is_in(tag_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|link| link.recipe_id)
                .collect();

            query = query.filter(entity::recipe::Column::Id.is_in(recipe_ids));
        }

        if let Some(user_id) = filter.favorited_by {
            let recipe_ids: Vec<i32> = entity::prelude::Favorite::find()
                .filter(entity::favorite::Column::UserId.eq(user_id))
                .all(self.db)
                .await?
                .into_iter()
                .map(|favorite| favorite.recipe_id)
                .collect();

            query = query.filter(entity::recipe::Column::Id.is_in(recipe_ids));
        }

        if let Some(user_id) = filter.in_cart_of {
            let recipe_ids: Vec<i32> = entity::prelude::ShoppingCart::find()
                .filter(entity::shopping_cart::Column::UserId.eq(user_id))
                .all(self.db)
                .await?
                .into_iter()
                .map(|entry| entry.recipe_id)
                .collect();

            query = query.filter(entity::recipe::Column::Id.is_in(recipe_ids));
        }

        Ok(query)
    }

    /// Loads authors, tags and ingredients for a batch of recipes, keeping input order.
    async fn load_relations(
        &self,
        recipes: Vec<entity::recipe::Model>,
    ) -> Result<Vec<RecipeWithRelations>, DbErr> {
        if recipes.is_empty() {
            return Ok(Vec::new());
        }

        let recipe_ids: Vec<i32> = recipes.iter().map(|r| r.id).collect();
        let author_ids: BTreeSet<i32> = recipes.iter().map(|r| r.author_id).collect();

        let authors: HashMap<i32, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(author_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        let tag_links = entity::prelude::RecipeTag::find()
            .filter(entity::recipe_tag::Column::RecipeId.is_in(recipe_ids.clone()))
            .all(self.db)
            .await?;
        let tag_ids: BTreeSet<i32> = tag_links.iter().map(|link| link.tag_id).collect();
        let tags: HashMap<i32, entity::tag::Model> = entity::prelude::Tag::find()
            .filter(entity::tag::Column::Id.is_in(tag_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|tag| (tag.id, tag))
            .collect();

        let ingredient_rows = entity::prelude::RecipeIngredient::find()
            .filter(entity::recipe_ingredient::Column::RecipeId.is_in(recipe_ids))
            .order_by_asc(entity::recipe_ingredient::Column::Id)
            .find_also_related(entity::prelude::Ingredient)
            .all(self.db)
            .await?;

        let mut tags_by_recipe: HashMap<i32, Vec<entity::tag::Model>> = HashMap::new();
        for link in tag_links {
            if let Some(tag) = tags.get(&link.tag_id) {
                tags_by_recipe
                    .entry(link.recipe_id)
                    .or_default()
                    .push(tag.clone());
            }
        }

        let mut ingredients_by_recipe: HashMap<
            i32,
            Vec<(entity::recipe_ingredient::Model, entity::ingredient::Model)>,
        > = HashMap::new();
        for (link, ingredient) in ingredient_rows {
            let ingredient = ingredient.ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "Ingredient {} of recipe {}",
                    link.ingredient_id, link.recipe_id
                ))
            })?;
            ingredients_by_recipe
                .entry(link.recipe_id)
                .or_default()
                .push((link, ingredient));
        }

        recipes
            .into_iter()
            .map(|recipe| {
                let author = authors.get(&recipe.author_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!("Author of recipe {}", recipe.id))
                })?;
                let mut tags = tags_by_recipe.remove(&recipe.id).unwrap_or_default();
                tags.sort_by(|a, b| a.name.cmp(&b.name));
                let ingredients = ingredients_by_recipe.remove(&recipe.id).unwrap_or_default();

                Ok(RecipeWithRelations {
                    recipe,
                    author,
                    tags,
                    ingredients,
                })
            })
            .collect()
    }
}
