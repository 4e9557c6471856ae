use super::*;

/// Tests creating a user.
///
/// Expected: Ok(User) findable by ID with the given role
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Admin,
        })
        .await?;

    let found = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(found.username, "alice");
    assert!(found.is_admin());

    Ok(())
}
