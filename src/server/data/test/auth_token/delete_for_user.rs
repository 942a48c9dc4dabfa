use super::*;

/// Tests deleting a user's token.
///
/// Expected: Ok(true) once, then Ok(false) and the key no longer resolves
#[tokio::test]
async fn deletes_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let token = factory::create_token(db, user.id).await?;
    let repo = AuthTokenRepository::new(db);

    assert!(repo.delete_for_user(user.id).await?);
    assert!(!repo.delete_for_user(user.id).await?);
    assert!(repo.find_user_by_key(&token.key).await?.is_none());

    Ok(())
}

/// Tests deleting one user's token leaves others intact.
///
/// Expected: other user's key still resolves
#[tokio::test]
async fn keeps_other_tokens() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_token(db, user.id).await?;
    let other_token = factory::create_token(db, other.id).await?;

    let repo = AuthTokenRepository::new(db);
    repo.delete_for_user(user.id).await?;

    assert!(repo.find_user_by_key(&other_token.key).await?.is_some());

    Ok(())
}
