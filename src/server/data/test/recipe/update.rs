use super::*;

/// Tests updating replaces tags and ingredients and keeps the image when none is given.
///
/// Expected: Ok(true) with only the new relations present
#[tokio::test]
async fn replaces_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, old_tag, old_ingredient, recipe) =
        factory::helpers::create_recipe_with_dependencies(db).await?;
    let new_tag = factory::create_tag(db).await?;
    let new_ingredient = factory::create_ingredient(db).await?;

    let repo = RecipeRepository::new(db);
    let updated = repo
        .update(UpdateRecipeParams {
            id: recipe.id,
            image: None,
            fields: fields("Renamed", vec![new_tag.id], vec![(new_ingredient.id, 7)]),
        })
        .await?;
    assert!(updated);

    let rows = repo.get_by_id(recipe.id).await?.unwrap();

    assert_eq!(rows.recipe.name, "Renamed");
    assert_eq!(rows.recipe.image, recipe.image);
    assert_eq!(rows.tags.iter().map(|t| t.id).collect::<Vec<_>>(), vec![new_tag.id]);
    assert!(rows.tags.iter().all(|t| t.id != old_tag.id));
    assert_eq!(rows.ingredients.len(), 1);
    assert_eq!(rows.ingredients[0].1.id, new_ingredient.id);
    assert_ne!(rows.ingredients[0].1.id, old_ingredient.id);
    assert_eq!(rows.ingredients[0].0.amount, 7);

    Ok(())
}

/// Tests updating a recipe that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_recipe() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tag = factory::create_tag(db).await?;
    let ingredient = factory::create_ingredient(db).await?;

    let updated = RecipeRepository::new(db)
        .update(UpdateRecipeParams {
            id: 404,
            image: Some(IMAGE.to_string()),
            fields: fields("Ghost", vec![tag.id], vec![(ingredient.id, 1)]),
        })
        .await?;

    assert!(!updated);

    Ok(())
}
