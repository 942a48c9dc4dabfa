use super::*;

/// Tests email and username uniqueness checks.
///
/// Expected: true for values held by another user, false otherwise
#[tokio::test]
async fn detects_taken_values() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .username("taken")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.email_taken("taken@example.com", None).await?);
    assert!(repo.username_taken("taken", None).await?);
    assert!(!repo.email_taken("free@example.com", None).await?);
    assert!(!repo.username_taken("free", None).await?);

    Ok(())
}

/// Tests a user's own values do not count as taken when excluded.
///
/// Expected: false when the holder is the excluded user
#[tokio::test]
async fn ignores_excluded_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("me@example.com")
        .username("myself")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(!repo.email_taken("me@example.com", Some(user.id)).await?);
    assert!(!repo.username_taken("myself", Some(user.id)).await?);

    Ok(())
}
