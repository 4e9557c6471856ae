use crate::server::{config::Config, error::AppError, util::jwt::JwtService};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    connect_sqlite(&config.database_url).await
}

/// Opens the Sqlite pool for `database_url` and applies migrations.
///
/// The pool holds a single connection. Sqlite allows one writer at a time, and a second
/// pooled connection starting a write transaction fails with `SQLITE_BUSY` instead of
/// waiting its turn.
pub async fn connect_sqlite(database_url: &str) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database connected and migrations applied");

    Ok(db)
}

/// Builds the token service from the configured secret and expiry.
pub fn setup_jwt_service(config: &Config) -> JwtService {
    JwtService::new(&config.jwt_secret, config.jwt_expiration_hours)
}
