use super::*;

/// Tests logging in with the signup credentials.
///
/// Expected: Ok((token, user)) where the token verifies to the user
#[tokio::test]
async fn issues_token_for_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let jwt = jwt();
    let service = AuthService::new(db, &jwt);
    let created = service.signup(signup_params("alice")).await?;

    // Email lookup ignores case and surrounding whitespace
    let (token, user) = service
        .login("  Alice@Example.com ", "correct horse")
        .await?;

    assert_eq!(user.id, created.id);
    let claims = jwt.verify_token(&token)?;
    assert_eq!(claims.sub, created.id);
    assert_eq!(claims.role, "admin");

    Ok(())
}

/// Tests logging in with a wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let jwt = jwt();
    let service = AuthService::new(db, &jwt);
    service.signup(signup_params("alice")).await?;

    let result = service.login("alice@example.com", "wrong horse").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in with an unknown email.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let jwt = jwt();
    let service = AuthService::new(db, &jwt);
    let result = service.login("nobody@example.com", "correct horse").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
