//! Admin session ports.

/// Claims carried by an admin session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    pub admin: bool,
}

/// Issues and validates signed session tokens.
pub trait TokenService: Send + Sync {
    /// Issue a token granting admin rights.
    fn issue_admin_token(&self) -> Result<String, AuthError>;

    /// Validate signature, issuer and expiry, then decode the claims.
    fn validate_token(&self, token: &str) -> Result<SessionClaims, AuthError>;

    /// Lifetime of freshly issued tokens.
    fn expiration_seconds(&self) -> i64;
}

/// Checks submitted passcodes against the configured admin passcode.
pub trait PasscodeVerifier: Send + Sync {
    /// Fails with [`AuthError::InvalidPasscode`] on a mismatch or when no
    /// passcode is configured.
    fn verify(&self, passcode: &str) -> Result<(), AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid passcode")]
    InvalidPasscode,

    #[error("Session expired")]
    TokenExpired,

    #[error("Invalid session token: {0}")]
    InvalidToken(String),

    #[error("Missing session cookie")]
    MissingSession,

    #[error("Session does not grant admin rights")]
    NotAdmin,

    #[error("Hashing error: {0}")]
    HashingError(String),
}
