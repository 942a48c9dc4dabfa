use super::*;

/// Tests raw ingredient rows are returned for every carted recipe.
///
/// Expected: one row per recipe ingredient, none for recipes outside the cart
#[tokio::test]
async fn returns_rows_of_carted_recipes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let author = factory::create_user(db).await?;
    let flour = factory::ingredient::create_named_ingredient(db, "flour", "g").await?;
    let sugar = factory::ingredient::create_named_ingredient(db, "sugar", "g").await?;

    let bread = factory::recipe::RecipeFactory::new(db, author.id)
        .ingredient(flour.id, 500)
        .build()
        .await?;
    let cake = factory::recipe::RecipeFactory::new(db, author.id)
        .ingredient(flour.id, 200)
        .ingredient(sugar.id, 100)
        .build()
        .await?;
    factory::recipe::RecipeFactory::new(db, author.id)
        .ingredient(sugar.id, 999)
        .build()
        .await?;

    factory::create_shopping_cart_entry(db, user.id, bread.id).await?;
    factory::create_shopping_cart_entry(db, user.id, cake.id).await?;

    let mut rows = RecipeRepository::new(db)
        .get_shopping_cart_ingredients(user.id)
        .await?;
    rows.sort();

    assert_eq!(
        rows,
        vec![
            ("flour".to_string(), "g".to_string(), 200),
            ("flour".to_string(), "g".to_string(), 500),
            ("sugar".to_string(), "g".to_string(), 100),
        ]
    );

    Ok(())
}

/// Tests an empty cart.
///
/// Expected: no rows
#[tokio::test]
async fn returns_empty_for_empty_cart() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let rows = RecipeRepository::new(db)
        .get_shopping_cart_ingredients(user.id)
        .await?;

    assert!(rows.is_empty());

    Ok(())
}
