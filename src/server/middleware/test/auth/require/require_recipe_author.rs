use super::*;

/// Tests the recipe author passes the ownership check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_author() -> Result<(), AppError> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _, _, recipe) = factory::helpers::create_recipe_with_dependencies(db).await?;
    let issued = factory::create_token(db, author.id).await?;

    let token = TokenAuth::new(Some(issued.key));
    let result = AuthGuard::new(db, &token)
        .require(&[Permission::RecipeAuthor(recipe.id)])
        .await?;

    assert_eq!(result.id, author.id);

    Ok(())
}

/// Tests another user cannot pass the ownership check.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, recipe) = factory::helpers::create_recipe_with_dependencies(db).await?;
    let stranger = factory::create_user(db).await?;
    let issued = factory::create_token(db, stranger.id).await?;

    let token = TokenAuth::new(Some(issued.key));
    let result = AuthGuard::new(db, &token)
        .require(&[Permission::RecipeAuthor(recipe.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) if user_id == stranger.id
    ));

    Ok(())
}

/// Tests admins may modify any recipe.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, recipe) = factory::helpers::create_recipe_with_dependencies(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let issued = factory::create_token(db, admin.id).await?;

    let token = TokenAuth::new(Some(issued.key));
    let result = AuthGuard::new(db, &token)
        .require(&[Permission::RecipeAuthor(recipe.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a missing recipe is reported as not found rather than forbidden.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_recipe() -> Result<(), AppError> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let issued = factory::create_token(db, user.id).await?;

    let token = TokenAuth::new(Some(issued.key));
    let result = AuthGuard::new(db, &token)
        .require(&[Permission::RecipeAuthor(9999)])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
