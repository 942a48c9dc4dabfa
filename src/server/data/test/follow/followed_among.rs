use super::*;

/// Tests which of the given authors the user follows.
///
/// Expected: only followed IDs from the candidate list
#[tokio::test]
async fn returns_followed_subset() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let followed = factory::create_user(db).await?;
    let not_followed = factory::create_user(db).await?;
    let followed_elsewhere = factory::create_user(db).await?;
    factory::create_follow(db, user.id, followed.id).await?;
    factory::create_follow(db, user.id, followed_elsewhere.id).await?;

    let result = FollowRepository::new(db)
        .followed_among(user.id, &[followed.id, not_followed.id])
        .await?;

    assert_eq!(result.len(), 1);
    assert!(result.contains(&followed.id));

    let empty = FollowRepository::new(db).followed_among(user.id, &[]).await?;
    assert!(empty.is_empty());

    Ok(())
}
