use super::*;

/// Tests tags are listed by name.
///
/// Expected: Ok with tags sorted alphabetically regardless of insertion order
#[tokio::test]
async fn orders_tags_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Tag).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Lunch", "Breakfast", "Dinner"] {
        factory::tag::TagFactory::new(db).name(name).build().await?;
    }

    let tags = TagRepository::new(db).get_all().await?;
    let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();

    assert_eq!(names, vec!["Breakfast", "Dinner", "Lunch"]);

    Ok(())
}

/// Tests fetching several tags by ID skips unknown ones.
///
/// Expected: only the existing tags
#[tokio::test]
async fn finds_existing_ids_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Tag).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_tag(db).await?;
    let second = factory::create_tag(db).await?;

    let tags = TagRepository::new(db)
        .find_by_ids(&[first.id, second.id, 999])
        .await?;

    assert_eq!(tags.len(), 2);
    assert!(TagRepository::new(db).find_by_ids(&[]).await?.is_empty());

    Ok(())
}
