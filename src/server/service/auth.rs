use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, booking::BookingError, AppError, DbResultExt},
    model::user::{CreateUserParams, Role, SignupParams, User},
    util::{
        jwt::JwtService,
        password::{hash_password, validate_password, verify_password},
    },
};

/// Service for account creation and password login.
///
/// Issues bearer tokens signed by the shared [`JwtService`]. Token verification on
/// incoming requests lives in the auth guard middleware.
pub struct AuthService<'a> {
    /// Database connection for user operations.
    pub db: &'a DatabaseConnection,
    /// Token signer.
    pub jwt: &'a JwtService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `jwt` - Reference to the token service
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtService) -> Self {
        Self { db, jwt }
    }

    /// Creates an account.
    ///
    /// The first account created while no admin exists is made an admin.
    ///
    /// # Arguments
    /// - `params` - Trimmed username, lowercased email and raw password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Blank username, malformed email, or short password
    /// - `Err(BookingError::AlreadyExists)` - Username or email already registered
    /// - `Err(AppError::DbErr)` - Database error during query or insert
    pub async fn signup(&self, params: SignupParams) -> Result<User, AppError> {
        if params.username.is_empty() {
            return Err(AppError::BadRequest("Username must not be empty".to_string()));
        }
        if !params.email.contains('@') {
            return Err(AppError::BadRequest("Email address is not valid".to_string()));
        }
        validate_password(&params.password)?;

        let user_repo = UserRepository::new(self.db);

        if user_repo
            .exists_by_username_or_email(&params.username, &params.email)
            .await
            .db_context("failed to check existing users")?
        {
            return Err(BookingError::AlreadyExists(
                "Username or email already registered".to_string(),
            )
            .into());
        }

        let role = if user_repo
            .admin_exists()
            .await
            .db_context("failed to check for admins")?
        {
            Role::User
        } else {
            Role::Admin
        };

        let password_hash = hash_password(&params.password)?;

        let user = match user_repo
            .create(CreateUserParams {
                username: params.username,
                email: params.email,
                password_hash,
                role,
            })
            .await
        {
            Ok(user) => user,
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(BookingError::AlreadyExists(
                    "Username or email already registered".to_string(),
                )
                .into());
            }
            Err(err) => return Err(AppError::db("failed to create user", err)),
        };

        tracing::info!("Created {} account {}", user.role.as_str(), user.username);

        Ok(user)
    }

    /// Checks credentials and issues a bearer token.
    ///
    /// # Returns
    /// - `Ok((String, User))` - Signed token and the authenticated user
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::TokenCreation)` - Signing failed
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, User), AppError> {
        let email = email.trim().to_lowercase();

        let Some((user, password_hash)) = UserRepository::new(self.db)
            .find_credentials_by_email(&email)
            .await
            .db_context("failed to fetch user credentials")?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.jwt.create_token(user.id, user.role)?;

        Ok((token, user))
    }
}
