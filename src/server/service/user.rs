//! User service for account lookups.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::user::UserRepository,
    error::{AppError, DbResultExt},
    model::user::User,
};

/// Service providing business logic for user lookups.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user(&self, user_id: Uuid) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await
            .db_context("failed to fetch user")?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
    }

    /// Retrieves every user ordered alphabetically by username.
    ///
    /// Used to pick an invitee.
    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        UserRepository::new(self.db)
            .get_all()
            .await
            .db_context("failed to fetch users")
    }
}
