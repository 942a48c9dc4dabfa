use super::*;

/// Tests pagination with multiple pages.
///
/// Verifies that the repository returns the requested slice of users ordered by ID
/// along with the total number of users.
///
/// Expected: Ok with correct page of users and total count
#[tokio::test]
async fn returns_correct_page_of_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..5 {
        ids.push(factory::create_user(db).await?.id);
    }

    let repo = UserRepository::new(db);

    let (users, total) = repo.get_all_paginated(0, 2).await?;
    assert_eq!(total, 5);
    assert_eq!(users.iter().map(|u| u.id).collect::<Vec<_>>(), ids[0..2]);

    let (users, _) = repo.get_all_paginated(2, 2).await?;
    assert_eq!(users.iter().map(|u| u.id).collect::<Vec<_>>(), ids[4..5]);

    Ok(())
}

/// Tests pagination with empty database.
///
/// Expected: Ok with empty vector and zero total
#[tokio::test]
async fn returns_empty_for_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (users, total) = UserRepository::new(db).get_all_paginated(0, 10).await?;

    assert!(users.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
