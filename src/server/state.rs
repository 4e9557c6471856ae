//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources needed by
//! the request handlers. The state is initialized once during startup and then cloned for
//! each request handler through Axum's state extraction.

use chrono::FixedOffset;
use sea_orm::DatabaseConnection;

use crate::server::util::jwt::JwtService;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `JwtService` holds the signing keys
/// - `FixedOffset` is `Copy`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signs tokens at login and verifies bearer tokens on every guarded request.
    pub jwt: JwtService,

    /// Reference time zone for slot dates and "slot passed" checks.
    ///
    /// Passed into every service that compares slot times to the current time.
    pub slot_offset: FixedOffset,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `jwt` - Token signing and verification service
    /// - `slot_offset` - Reference time zone for slot rules
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, jwt: JwtService, slot_offset: FixedOffset) -> Self {
        Self {
            db,
            jwt,
            slot_offset,
        }
    }
}
