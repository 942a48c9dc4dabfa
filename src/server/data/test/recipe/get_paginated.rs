use super::*;
use chrono::{Duration, Utc};

/// Tests recipes are returned newest first with the total count.
///
/// Expected: Ok with the requested page in pub_date descending order
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let now = Utc::now();
    let old = factory::recipe::RecipeFactory::new(db, author.id)
        .pub_date(now - Duration::days(2))
        .build()
        .await?;
    let newest = factory::recipe::RecipeFactory::new(db, author.id)
        .pub_date(now)
        .build()
        .await?;
    let middle = factory::recipe::RecipeFactory::new(db, author.id)
        .pub_date(now - Duration::days(1))
        .build()
        .await?;

    let repo = RecipeRepository::new(db);

    let (page, total) = repo.get_paginated(&RecipeFilter::default(), 0, 2).await?;
    assert_eq!(total, 3);
    assert_eq!(
        page.iter().map(|r| r.recipe.id).collect::<Vec<_>>(),
        vec![newest.id, middle.id]
    );

    let (page, _) = repo.get_paginated(&RecipeFilter::default(), 1, 2).await?;
    assert_eq!(page.iter().map(|r| r.recipe.id).collect::<Vec<_>>(), vec![old.id]);

    Ok(())
}

/// Tests several tag slugs match any of them without duplicating recipes.
///
/// Expected: recipes carrying either tag, each once
#[tokio::test]
async fn filters_by_any_tag_without_duplicates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let lunch = factory::tag::create_tag_with_slug(db, "lunch").await?;
    let dinner = factory::tag::create_tag_with_slug(db, "dinner").await?;
    let dessert = factory::tag::create_tag_with_slug(db, "dessert").await?;

    let both = factory::recipe::RecipeFactory::new(db, author.id)
        .tag(lunch.id)
        .tag(dinner.id)
        .build()
        .await?;
    let lunch_only = factory::recipe::RecipeFactory::new(db, author.id)
        .tag(lunch.id)
        .build()
        .await?;
    factory::recipe::RecipeFactory::new(db, author.id)
        .tag(dessert.id)
        .build()
        .await?;

    let filter = RecipeFilter {
        tag_slugs: vec!["lunch".to_string(), "dinner".to_string()],
        ..Default::default()
    };
    let (page, total) = RecipeRepository::new(db).get_paginated(&filter, 0, 10).await?;

    let mut ids: Vec<i32> = page.iter().map(|r| r.recipe.id).collect();
    ids.sort();
    assert_eq!(total, 2);
    assert_eq!(ids, vec![both.id, lunch_only.id]);

    Ok(())
}

/// Tests an unknown tag slug matches nothing.
///
/// Expected: empty page
#[tokio::test]
async fn unknown_tag_matches_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_recipe_with_dependencies(db).await?;

    let filter = RecipeFilter {
        tag_slugs: vec!["no-such-tag".to_string()],
        ..Default::default()
    };
    let (page, total) = RecipeRepository::new(db).get_paginated(&filter, 0, 10).await?;

    assert!(page.is_empty());
    assert_eq!(total, 0);

    Ok(())
}

/// Tests the author, name, favorites and shopping cart filters.
///
/// Expected: each filter narrows the result to the matching recipe
#[tokio::test]
async fn applies_author_name_and_user_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let soup = factory::recipe::RecipeFactory::new(db, alice.id)
        .name("Tomato soup")
        .build()
        .await?;
    let cake = factory::recipe::RecipeFactory::new(db, bob.id)
        .name("Carrot cake")
        .build()
        .await?;
    factory::create_favorite(db, alice.id, cake.id).await?;
    factory::create_shopping_cart_entry(db, bob.id, soup.id).await?;

    let repo = RecipeRepository::new(db);

    let ids = recipe_ids(&repo, RecipeFilter {
        author_id: Some(bob.id),
        ..Default::default()
    })
    .await?;
    assert_eq!(ids, vec![cake.id]);

    let ids = recipe_ids(&repo, RecipeFilter {
        name: Some("soup".to_string()),
        ..Default::default()
    })
    .await?;
    assert_eq!(ids, vec![soup.id]);

    let ids = recipe_ids(&repo, RecipeFilter {
        favorited_by: Some(alice.id),
        ..Default::default()
    })
    .await?;
    assert_eq!(ids, vec![cake.id]);

    let ids = recipe_ids(&repo, RecipeFilter {
        in_cart_of: Some(bob.id),
        ..Default::default()
    })
    .await?;
    assert_eq!(ids, vec![soup.id]);

    let ids = recipe_ids(&repo, RecipeFilter {
        favorited_by: Some(bob.id),
        ..Default::default()
    })
    .await?;
    assert!(ids.is_empty());

    Ok(())
}

async fn recipe_ids(repo: &RecipeRepository<'_>, filter: RecipeFilter) -> Result<Vec<i32>, DbErr> {
    let (page, _) = repo.get_paginated(&filter, 0, 10).await?;

    Ok(page.into_iter().map(|r| r.recipe.id).collect())
}
