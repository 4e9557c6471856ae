use crate::server::{error::AppError, service::user::UserService};
use test_utils::{builder::TestBuilder, factory};

/// Tests fetching a stored user.
///
/// Expected: Ok(User) with the stored username and role
#[tokio::test]
async fn gets_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db)
        .admin(true)
        .build()
        .await?;

    let user = UserService::new(db).get_user(admin.id).await?;

    assert_eq!(user.username, admin.username);
    assert!(user.is_admin());

    Ok(())
}

/// Tests fetching a user that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db).get_user(uuid::Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests listing users.
///
/// Expected: every stored user is returned
#[tokio::test]
async fn lists_all_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    factory::create_user(db).await?;

    assert_eq!(UserService::new(db).get_all_users().await?.len(), 2);

    Ok(())
}
