use super::*;

/// Tests adding and removing a shopping cart entry.
///
/// Expected: exists() follows add/remove, remove() reports whether a row was removed
#[tokio::test]
async fn adds_and_removes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, recipe) = factory::helpers::create_recipe_with_dependencies(db).await?;
    let user = factory::create_user(db).await?;
    let repo = ShoppingCartRepository::new(db);

    repo.add(user.id, recipe.id).await?;
    assert!(repo.exists(user.id, recipe.id).await?);

    assert!(repo.remove(user.id, recipe.id).await?);
    assert!(!repo.remove(user.id, recipe.id).await?);
    assert!(!repo.exists(user.id, recipe.id).await?);

    Ok(())
}

/// Tests carted recipes are tracked per user.
///
/// Expected: only the user's own cart entries among the candidates
#[tokio::test]
async fn returns_carted_subset() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let user = factory::create_user(db).await?;
    let planned = factory::create_recipe(db, author.id).await?;
    let not_planned = factory::create_recipe(db, author.id).await?;
    factory::create_shopping_cart_entry(db, user.id, planned.id).await?;

    let result = ShoppingCartRepository::new(db)
        .carted_among(user.id, &[planned.id, not_planned.id])
        .await?;

    assert_eq!(result.len(), 1);
    assert!(result.contains(&planned.id));

    Ok(())
}
