use super::*;
use chrono::{Duration, Utc};

/// Tests the recipe preview is newest first and honors the limit.
///
/// Expected: limited list plus the full count
#[tokio::test]
async fn limits_newest_recipes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let now = Utc::now();
    let mut ids = Vec::new();
    for days in (0..3).rev() {
        let recipe = factory::recipe::RecipeFactory::new(db, author.id)
            .pub_date(now - Duration::days(days))
            .build()
            .await?;
        ids.push(recipe.id);
    }
    factory::create_recipe(db, other.id).await?;

    let repo = RecipeRepository::new(db);

    let preview = repo.get_short_by_author(author.id, Some(2)).await?;
    assert_eq!(
        preview.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![ids[2], ids[1]]
    );

    assert_eq!(repo.get_short_by_author(author.id, None).await?.len(), 3);
    assert_eq!(repo.count_by_author(author.id).await?, 3);

    Ok(())
}
