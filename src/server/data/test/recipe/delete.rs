use super::*;
use entity::prelude::{Favorite, RecipeIngredient, ShoppingCart};
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests deleting a recipe removes every dependent row.
///
/// Expected: Ok(true) and no link, favorite or cart rows left
#[tokio::test]
async fn deletes_recipe_and_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, recipe) = factory::helpers::create_recipe_with_dependencies(db).await?;
    let fan = factory::create_user(db).await?;
    factory::create_favorite(db, fan.id, recipe.id).await?;
    factory::create_shopping_cart_entry(db, fan.id, recipe.id).await?;

    let repo = RecipeRepository::new(db);

    assert!(repo.delete(recipe.id).await?);
    assert!(repo.get_by_id(recipe.id).await?.is_none());
    assert_eq!(RecipeIngredient::find().count(db).await?, 0);
    assert_eq!(Favorite::find().count(db).await?, 0);
    assert_eq!(ShoppingCart::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a recipe that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_recipe() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!RecipeRepository::new(db).delete(1).await?);

    Ok(())
}
