use super::*;

/// Tests anonymous requests resolve to no user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let token = TokenAuth::new(None);
    let result = AuthGuard::new(db, &token).optional().await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests a valid token resolves to its owner.
///
/// Expected: Ok(Some(User)) with the token owner's ID
#[tokio::test]
async fn returns_token_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let issued = factory::create_token(db, user.id).await?;

    let token = TokenAuth::new(Some(issued.key));
    let result = AuthGuard::new(db, &token).optional().await?;

    assert_eq!(result.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests an unknown token is rejected instead of being treated as anonymous.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let token = TokenAuth::new(Some("not-a-real-token".to_string()));
    let result = AuthGuard::new(db, &token).optional().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}
