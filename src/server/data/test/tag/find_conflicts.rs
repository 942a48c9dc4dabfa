use super::*;

/// Tests every clashing field is reported.
///
/// Expected: name and slug reported, color not
#[tokio::test]
async fn reports_clashing_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Tag).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::tag::TagFactory::new(db)
        .name("Dinner")
        .color("#000000")
        .slug("dinner")
        .build()
        .await?;

    let conflicts = TagRepository::new(db)
        .find_conflicts(&CreateTagParams {
            name: "Dinner".to_string(),
            color: "#FFFFFF".to_string(),
            slug: "dinner".to_string(),
        })
        .await?;

    assert_eq!(conflicts, vec!["name", "slug"]);

    Ok(())
}

/// Tests a fresh tag has no conflicts.
///
/// Expected: empty list
#[tokio::test]
async fn returns_empty_for_unique_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Tag).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_tag(db).await?;

    let conflicts = TagRepository::new(db)
        .find_conflicts(&CreateTagParams {
            name: "Brand new".to_string(),
            color: "#ABCDEF".to_string(),
            slug: "brand-new".to_string(),
        })
        .await?;

    assert!(conflicts.is_empty());

    Ok(())
}
