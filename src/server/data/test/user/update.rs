use super::*;

/// Tests only the provided fields change.
///
/// Expected: Ok(Some(User)) with the new first name and everything else untouched
#[tokio::test]
async fn updates_only_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let updated = UserRepository::new(db)
        .update(UpdateUserParams {
            id: user.id,
            first_name: Some("Anna".to_string()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.first_name, "Anna");
    assert_eq!(updated.last_name, user.last_name);
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.username, user.username);

    Ok(())
}

/// Tests updating an unknown user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(UpdateUserParams {
            id: 42,
            username: Some("ghost".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests the stored password hash is replaced.
///
/// Expected: new hash returned by get_password_hash
#[tokio::test]
async fn replaces_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    repo.set_password_hash(user.id, "new-hash".to_string())
        .await?;

    assert_eq!(
        repo.get_password_hash(user.id).await?.as_deref(),
        Some("new-hash")
    );

    Ok(())
}
