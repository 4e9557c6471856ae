//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing booking, invitation and scoring rules
//! - **Orchestration**: Coordinating multiple repository and service calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running read-check-write sequences atomically
//!
//! Services that take part in a transaction are generic over `ConnectionTrait` so they
//! can be constructed on an open `DatabaseTransaction`. Services that compare slot times
//! to the current time take the configured reference offset at construction.

pub mod auth;
pub mod booking;
pub mod game;
pub mod invitation;
pub mod leaderboard;
pub mod notification;
pub mod slot;
pub mod user;

#[cfg(test)]
mod test;
