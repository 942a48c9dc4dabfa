use super::*;

/// Tests adding and removing a favorite.
///
/// Expected: exists() follows add/remove, remove() reports whether a row was removed
#[tokio::test]
async fn adds_and_removes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, recipe) = factory::helpers::create_recipe_with_dependencies(db).await?;
    let user = factory::create_user(db).await?;
    let repo = FavoriteRepository::new(db);

    repo.add(user.id, recipe.id).await?;
    assert!(repo.exists(user.id, recipe.id).await?);

    assert!(repo.remove(user.id, recipe.id).await?);
    assert!(!repo.remove(user.id, recipe.id).await?);
    assert!(!repo.exists(user.id, recipe.id).await?);

    Ok(())
}

/// Tests favorites are tracked per user.
///
/// Expected: only the user's own favorites among the candidates
#[tokio::test]
async fn returns_favorited_subset() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let liked = factory::create_recipe(db, author.id).await?;
    let liked_by_other = factory::create_recipe(db, author.id).await?;
    factory::create_favorite(db, user.id, liked.id).await?;
    factory::create_favorite(db, other.id, liked_by_other.id).await?;

    let result = FavoriteRepository::new(db)
        .favorited_among(user.id, &[liked.id, liked_by_other.id])
        .await?;

    assert_eq!(result.len(), 1);
    assert!(result.contains(&liked.id));

    Ok(())
}
