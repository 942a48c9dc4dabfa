use super::*;

/// Tests a key resolves to its owner.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn resolves_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let token = factory::create_token(db, user.id).await?;

    let owner = AuthTokenRepository::new(db)
        .find_user_by_key(&token.key)
        .await?;

    assert_eq!(owner.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests an unknown key.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = AuthTokenRepository::new(db)
        .find_user_by_key("missing")
        .await?;

    assert!(owner.is_none());

    Ok(())
}
