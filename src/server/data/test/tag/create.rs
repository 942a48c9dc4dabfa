use super::*;

/// Tests creating a tag.
///
/// Expected: Ok(Tag) retrievable by ID
#[tokio::test]
async fn creates_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Tag).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);
    let tag = repo
        .create(CreateTagParams {
            name: "Breakfast".to_string(),
            color: "#E26C2D".to_string(),
            slug: "breakfast".to_string(),
        })
        .await?;

    assert_eq!(tag.name, "Breakfast");
    assert_eq!(tag.color, "#E26C2D");
    assert_eq!(tag.slug, "breakfast");
    assert_eq!(repo.find_by_id(tag.id).await?, Some(tag));

    Ok(())
}
