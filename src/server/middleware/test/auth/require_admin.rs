use super::*;

/// Tests admin permission for an admin user.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_admin() -> Result<(), AppError> {
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

    let jwt = jwt();
    let headers = bearer(&jwt.create_token(admin.id, Role::Admin)?);
    let user = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert!(user.is_admin());

    Ok(())
}

/// Tests admin permission for a regular user.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_regular_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let jwt = jwt();
    let headers = bearer(&jwt.create_token(user.id, Role::User)?);
    let result = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that the stored role decides, not the role claimed in the token.
///
/// Expected: Err(AuthError::AccessDenied) for a regular user holding an admin token
#[tokio::test]
async fn ignores_role_claim() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let jwt = jwt();
    let headers = bearer(&jwt.create_token(user.id, Role::Admin)?);
    let result = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
