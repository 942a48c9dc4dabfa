use super::*;

/// Tests creating a user stores every field.
///
/// Expected: Ok(User) with the registered fields and admin flag off
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(&register_params("chef"), "hashed".to_string())
        .await?;

    assert_eq!(user.email, "chef@example.com");
    assert_eq!(user.username, "chef");
    assert_eq!(user.first_name, "Ivan");
    assert_eq!(user.last_name, "Petrov");
    assert!(!user.is_admin);

    let hash = repo.get_password_hash(user.id).await?;
    assert_eq!(hash.as_deref(), Some("hashed"));

    Ok(())
}

/// Tests users are retrievable by ID after creation.
///
/// Expected: Ok(Some) for the created ID, Ok(None) for an unknown one
#[tokio::test]
async fn finds_created_user_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(&register_params("baker"), "hashed".to_string())
        .await?;

    assert_eq!(repo.find_by_id(user.id).await?.map(|u| u.id), Some(user.id));
    assert_eq!(repo.find_by_id(user.id + 100).await?, None);

    Ok(())
}
