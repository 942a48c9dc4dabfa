use super::*;

/// Tests following and unfollowing an author.
///
/// Expected: exists() tracks the follow, delete() reports whether a row was removed
#[tokio::test]
async fn follows_and_unfollows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let author = factory::create_user(db).await?;
    let repo = FollowRepository::new(db);

    assert!(!repo.exists(user.id, author.id).await?);

    repo.create(user.id, author.id).await?;
    assert!(repo.exists(user.id, author.id).await?);
    assert!(!repo.exists(author.id, user.id).await?);

    assert!(repo.delete(user.id, author.id).await?);
    assert!(!repo.delete(user.id, author.id).await?);
    assert!(!repo.exists(user.id, author.id).await?);

    Ok(())
}
