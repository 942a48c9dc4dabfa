use super::*;

/// Tests creating an ingredient and checking for its existence.
///
/// Expected: exists() true for the (name, unit) pair only
#[tokio::test]
async fn creates_ingredient() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Ingredient).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = IngredientRepository::new(db);
    let ingredient = repo
        .create(CreateIngredientParams {
            name: "flour".to_string(),
            measurement_unit: "g".to_string(),
        })
        .await?;

    assert_eq!(ingredient.name, "flour");
    assert_eq!(ingredient.measurement_unit, "g");
    assert!(repo.exists("flour", "g").await?);
    assert!(!repo.exists("flour", "kg").await?);
    assert_eq!(
        repo.find_by_id(ingredient.id).await?.map(|i| i.id),
        Some(ingredient.id)
    );

    Ok(())
}
