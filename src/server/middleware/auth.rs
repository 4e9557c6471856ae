use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError, DbResultExt},
    model::user::User,
    util::jwt::JwtService,
};

pub enum Permission {
    Admin,
}

/// Resolves the bearer token of a request to a stored user and checks permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtService, headers: &'a HeaderMap) -> Self {
        Self { db, jwt, headers }
    }

    /// Returns the authenticated user if every permission is satisfied.
    ///
    /// # Returns
    /// - `Ok(User)` - Token valid, user exists, permissions granted
    /// - `Err(AuthError::MissingToken)` - No `Authorization: Bearer` header
    /// - `Err(AuthError::InvalidToken)` - Bad signature or expired token
    /// - `Err(AuthError::UserNotInDatabase)` - Token subject was deleted
    /// - `Err(AuthError::AccessDenied)` - User lacks a required permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = self
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)?;

        let claims = self.jwt.verify_token(token)?;

        let Some(user) = UserRepository::new(self.db)
            .find_by_id(claims.sub)
            .await
            .db_context("failed to fetch authenticated user")?
        else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted an admin action without the admin role".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
