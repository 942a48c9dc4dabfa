use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;
use super::m20260301_000005_create_recipe_table::Recipe;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShoppingCart::Table)
                    .if_not_exists()
                    .col(pk_auto(ShoppingCart::Id))
                    .col(integer(ShoppingCart::UserId))
                    .col(integer(ShoppingCart::RecipeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shopping_cart_user_id")
                            .from(ShoppingCart::Table, ShoppingCart::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shopping_cart_recipe_id")
                            .from(ShoppingCart::Table, ShoppingCart::RecipeId)
                            .to(Recipe::Table, Recipe::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_shopping_cart_user_id_recipe_id")
                    .table(ShoppingCart::Table)
                    .col(ShoppingCart::UserId)
                    .col(ShoppingCart::RecipeId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShoppingCart::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ShoppingCart {
    Table,
    Id,
    UserId,
    RecipeId,
}
