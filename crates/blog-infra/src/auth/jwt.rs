//! JWT session token service implementation.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use blog_core::ports::{AuthError, SessionClaims, TokenService};

const DEFAULT_SECRET: &str = "dev_secret";
const ADMIN_SUBJECT: &str = "admin";
const DEFAULT_EXPIRATION_HOURS: i64 = 24;
/// Upper bound on the session lifetime: one year.
pub const MAX_EXPIRATION_HOURS: i64 = 24 * 365;

/// JWT token service configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            expiration_hours: DEFAULT_EXPIRATION_HOURS,
            issuer: "blog-api".to_string(),
        }
    }
}

impl JwtConfig {
    /// Load configuration from `SECRET_KEY`, `SESSION_TTL_HOURS` and `SESSION_ISSUER`.
    pub fn from_env() -> Self {
        let secret = std::env::var("SECRET_KEY").unwrap_or_else(|_| DEFAULT_SECRET.to_string());

        // Warn if using default secret in production
        if secret == DEFAULT_SECRET {
            let is_production = std::env::var("RUST_ENV")
                .map(|v| v == "production" || v == "prod")
                .unwrap_or(false);

            if is_production {
                tracing::error!(
                    "SECURITY: Using default session secret in production! Set SECRET_KEY environment variable."
                );
            } else {
                tracing::warn!("Using default session secret. Set SECRET_KEY for production use.");
            }
        }

        Self {
            secret,
            expiration_hours: parse_expiration_hours(std::env::var("SESSION_TTL_HOURS").ok()),
            issuer: std::env::var("SESSION_ISSUER").unwrap_or_else(|_| "blog-api".to_string()),
        }
    }
}

/// Session lifetime from `SESSION_TTL_HOURS`, clamped to `1..=MAX_EXPIRATION_HOURS`.
fn parse_expiration_hours(raw: Option<String>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .map(|hours| hours.clamp(1, MAX_EXPIRATION_HOURS))
        .unwrap_or(DEFAULT_EXPIRATION_HOURS)
}

/// Internal JWT claims structure for serialization.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    admin: bool,
    exp: i64,
    iat: i64,
    iss: String,
}

/// HS256 signed session tokens.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: JwtConfig,
}

impl JwtTokenService {
    pub fn new(mut config: JwtConfig) -> Self {
        config.expiration_hours = config.expiration_hours.clamp(1, MAX_EXPIRATION_HOURS);
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            encoding_key,
            decoding_key,
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(JwtConfig::from_env())
    }

    fn sign(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}

impl TokenService for JwtTokenService {
    fn issue_admin_token(&self) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now + TimeDelta::hours(self.config.expiration_hours);

        self.sign(&Claims {
            sub: ADMIN_SUBJECT.to_string(),
            admin: true,
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
        })
    }

    fn validate_token(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);
        validation.sub = Some(ADMIN_SUBJECT.to_string());

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            }
        })?;

        Ok(SessionClaims {
            admin: token_data.claims.admin,
        })
    }

    fn expiration_seconds(&self) -> i64 {
        self.config.expiration_hours * 3600
    }
}
