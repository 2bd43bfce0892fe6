//! Application state - shared across all handlers.

use std::sync::Arc;

use sea_orm::DbConn;

use blog_core::ports::{AuthError, PasscodeVerifier, PostRepository, TokenService};
use blog_infra::{Argon2PasscodeVerifier, JwtTokenService, SeaOrmPostRepository};

use crate::config::{AppConfig, SessionCookieConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DbConn>,
    pub posts: Arc<dyn PostRepository>,
    pub tokens: Arc<dyn TokenService>,
    pub passcode: Arc<dyn PasscodeVerifier>,
    pub session: SessionCookieConfig,
}

impl AppState {
    /// Build the application state over an open store connection.
    pub fn new(db: DbConn, config: &AppConfig) -> Result<Self, AuthError> {
        let db = Arc::new(db);
        let passcode = Argon2PasscodeVerifier::from_config(
            config.admin.passcode_hash.as_deref(),
            config.admin.passcode.as_deref(),
        )?;

        tracing::info!(
            admin_login = passcode.is_enabled(),
            "Application state initialized"
        );

        Ok(Self {
            posts: Arc::new(SeaOrmPostRepository::new(Arc::clone(&db))),
            db,
            tokens: Arc::new(JwtTokenService::new(config.jwt.clone())),
            passcode: Arc::new(passcode),
            session: config.session.clone(),
        })
    }
}
