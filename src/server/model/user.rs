//! User domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::{auth::SignupDto, user::UserDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    /// Maps a stored role name; anything other than `admin` is a regular user.
    pub fn from_db(value: &str) -> Self {
        match value {
            "admin" => Role::Admin,
            _ => Role::User,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            role: self.role.as_str().to_string(),
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The password hash is deliberately left behind in the entity.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            role: Role::from_db(&entity.role),
            created_at: entity.created_at,
        }
    }
}

/// Parameters for inserting a new account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Validated signup input before hashing.
#[derive(Debug, Clone)]
pub struct SignupParams {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignupParams {
    /// Trims identity fields and lowercases the email.
    pub fn from_dto(dto: SignupDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            email: dto.email.trim().to_lowercase(),
            password: dto.password,
        }
    }
}
