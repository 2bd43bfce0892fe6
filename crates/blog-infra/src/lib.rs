//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `postgres` - PostgreSQL store support via SeaORM
//! - `sqlite` - File-based SQLite store support via SeaORM
//! - `auth` - JWT session tokens + Argon2 admin passcode check

pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

pub use database::{DatabaseConfig, SeaOrmPostRepository, connect};

#[cfg(feature = "auth")]
pub use auth::{Argon2PasscodeVerifier, JwtConfig, JwtTokenService};
