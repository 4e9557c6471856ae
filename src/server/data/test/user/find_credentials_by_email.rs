use super::*;

/// Tests loading a user together with their password hash.
///
/// Expected: Ok(Some((User, hash))) for a known email, Ok(None) otherwise
#[tokio::test]
async fn returns_user_and_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("carol@example.com")
        .password_hash("stored-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let (user, hash) = repo
        .find_credentials_by_email("carol@example.com")
        .await?
        .unwrap();
    assert_eq!(user.id, created.id);
    assert_eq!(hash, "stored-hash");

    assert!(repo
        .find_credentials_by_email("nobody@example.com")
        .await?
        .is_none());

    Ok(())
}
