use super::*;

/// Tests searching by name prefix.
///
/// Expected: only names starting with the prefix, sorted by name
#[tokio::test]
async fn matches_name_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Ingredient).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::ingredient::create_named_ingredient(db, "sugar", "g").await?;
    factory::ingredient::create_named_ingredient(db, "salt", "g").await?;
    factory::ingredient::create_named_ingredient(db, "brown sugar", "g").await?;

    let found = IngredientRepository::new(db).search(Some("s")).await?;
    let names: Vec<&str> = found.iter().map(|i| i.name.as_str()).collect();

    assert_eq!(names, vec!["salt", "sugar"]);

    Ok(())
}

/// Tests searching without a prefix returns everything.
///
/// Expected: all ingredients
#[tokio::test]
async fn returns_all_without_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Ingredient).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_ingredient(db).await?;
    factory::create_ingredient(db).await?;

    let found = IngredientRepository::new(db).search(None).await?;

    assert_eq!(found.len(), 2);

    Ok(())
}
