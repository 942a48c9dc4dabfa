use super::*;

/// Tests creating a recipe writes its tag and ingredient rows.
///
/// Expected: Ok(id) and get_by_id returns the recipe with sorted tags and ingredients
/// in insertion order
#[tokio::test]
async fn creates_recipe_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let lunch = factory::tag::TagFactory::new(db).name("Lunch").build().await?;
    let breakfast = factory::tag::TagFactory::new(db).name("Breakfast").build().await?;
    let milk = factory::ingredient::create_named_ingredient(db, "milk", "ml").await?;
    let eggs = factory::ingredient::create_named_ingredient(db, "eggs", "pcs").await?;

    let repo = RecipeRepository::new(db);
    let recipe_id = repo
        .create(CreateRecipeParams {
            author_id: author.id,
            image: IMAGE.to_string(),
            fields: fields(
                "Omelette",
                vec![lunch.id, breakfast.id],
                vec![(milk.id, 100), (eggs.id, 3)],
            ),
        })
        .await?;

    let rows = repo.get_by_id(recipe_id).await?.unwrap();

    assert_eq!(rows.recipe.name, "Omelette");
    assert_eq!(rows.recipe.image, IMAGE);
    assert_eq!(rows.author.id, author.id);
    assert_eq!(
        rows.tags.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
        vec!["Breakfast", "Lunch"]
    );
    assert_eq!(
        rows.ingredients
            .iter()
            .map(|(link, ingredient)| (ingredient.name.as_str(), link.amount))
            .collect::<Vec<_>>(),
        vec![("milk", 100), ("eggs", 3)]
    );

    Ok(())
}

/// Tests the author lookup used for ownership checks.
///
/// Expected: Some(author_id) for an existing recipe, None otherwise
#[tokio::test]
async fn resolves_author_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _, _, recipe) = factory::helpers::create_recipe_with_dependencies(db).await?;
    let repo = RecipeRepository::new(db);

    assert_eq!(repo.get_author_id(recipe.id).await?, Some(author.id));
    assert_eq!(repo.get_author_id(recipe.id + 1).await?, None);

    Ok(())
}
