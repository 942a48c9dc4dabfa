use super::*;

/// Tests promoting a registered user.
///
/// Expected: Ok(true) and the user becomes admin
#[tokio::test]
async fn promotes_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("boss@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    assert!(repo.set_admin_by_email("boss@example.com", true).await?);

    let user = repo.find_by_id(user.id).await?.unwrap();
    assert!(user.is_admin);

    Ok(())
}

/// Tests promoting an unknown email.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let promoted = UserRepository::new(db)
        .set_admin_by_email("nobody@example.com", true)
        .await?;

    assert!(!promoted);

    Ok(())
}
