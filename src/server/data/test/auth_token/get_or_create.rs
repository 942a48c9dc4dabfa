use super::*;

/// Tests a user without a token gets the new key stored.
///
/// Expected: Ok(new_key)
#[tokio::test]
async fn stores_new_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let key = AuthTokenRepository::new(db)
        .get_or_create(user.id, "a".repeat(40))
        .await?;

    assert_eq!(key, "a".repeat(40));

    Ok(())
}

/// Tests logging in twice keeps the first key.
///
/// Expected: Ok(first_key) on the second call
#[tokio::test]
async fn reuses_existing_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = AuthTokenRepository::new(db);

    let first = repo.get_or_create(user.id, "a".repeat(40)).await?;
    let second = repo.get_or_create(user.id, "b".repeat(40)).await?;

    assert_eq!(first, second);

    Ok(())
}
