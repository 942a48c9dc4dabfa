use super::*;

mod require_admin;
mod require_recipe_author;

/// Tests a request without a token is rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let token = TokenAuth::new(None);
    let result = AuthGuard::new(db, &token).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token deleted by logout no longer authenticates.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_deleted_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let issued = factory::create_token(db, user.id).await?;
    crate::server::data::auth_token::AuthTokenRepository::new(db)
        .delete_for_user(user.id)
        .await?;

    let token = TokenAuth::new(Some(issued.key));
    let result = AuthGuard::new(db, &token).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests empty permission list grants access.
///
/// Verifies that when no permissions are required, any authenticated user is
/// granted access.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let issued = factory::create_token(db, user.id).await?;

    let token = TokenAuth::new(Some(issued.key));
    let result = AuthGuard::new(db, &token).require(&[]).await;

    assert!(result.is_ok());
    let returned_user = result.unwrap();
    assert_eq!(returned_user.id, user.id);
    assert_eq!(returned_user.username, user.username);

    Ok(())
}
