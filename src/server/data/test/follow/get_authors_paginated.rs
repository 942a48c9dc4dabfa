use super::*;

/// Tests followed authors are paged in follow order.
///
/// Expected: authors in the order they were followed, with the total follow count
#[tokio::test]
async fn pages_authors_in_follow_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let third = factory::create_user(db).await?;
    factory::create_follow(db, user.id, third.id).await?;
    factory::create_follow(db, user.id, first.id).await?;
    factory::create_follow(db, user.id, second.id).await?;
    factory::create_follow(db, first.id, second.id).await?;

    let repo = FollowRepository::new(db);

    let (authors, total) = repo.get_authors_paginated(user.id, 0, 2).await?;
    assert_eq!(total, 3);
    assert_eq!(
        authors.iter().map(|a| a.id).collect::<Vec<_>>(),
        vec![third.id, first.id]
    );

    let (authors, _) = repo.get_authors_paginated(user.id, 1, 2).await?;
    assert_eq!(authors.iter().map(|a| a.id).collect::<Vec<_>>(), vec![second.id]);

    let (authors, _) = repo.get_authors_paginated(user.id, 5, 2).await?;
    assert!(authors.is_empty());

    Ok(())
}
