//! Argon2 check of the admin passcode.

use argon2::{
    Argon2,
    password_hash::{
        Error as HashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};

use blog_core::ports::{AuthError, PasscodeVerifier};

/// Holds the Argon2 hash of the admin passcode, if one is configured.
pub struct Argon2PasscodeVerifier {
    argon2: Argon2<'static>,
    hash: Option<String>,
}

impl Argon2PasscodeVerifier {
    /// Use a PHC hash produced elsewhere (e.g. `ADMIN_PASSCODE_HASH`).
    pub fn from_hash(hash: impl Into<String>) -> Result<Self, AuthError> {
        let hash = hash.into();
        PasswordHash::new(&hash).map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::default(),
            hash: Some(hash),
        })
    }

    /// Hash a plain passcode once, with a fresh salt.
    pub fn from_passcode(passcode: &str) -> Result<Self, AuthError> {
        let argon2 = Argon2::default();
        let salt = SaltString::generate(&mut OsRng);
        let hash = argon2
            .hash_password(passcode.as_bytes(), &salt)
            .map_err(|e| AuthError::HashingError(e.to_string()))?
            .to_string();

        Ok(Self {
            argon2,
            hash: Some(hash),
        })
    }

    /// A verifier that rejects everything.
    pub fn disabled() -> Self {
        Self {
            argon2: Argon2::default(),
            hash: None,
        }
    }

    /// Build from configuration. A pre-computed hash wins over a plain passcode;
    /// with neither, admin login is disabled.
    pub fn from_config(hash: Option<&str>, passcode: Option<&str>) -> Result<Self, AuthError> {
        match (hash, passcode) {
            (Some(hash), _) => Self::from_hash(hash),
            (None, Some(passcode)) => Self::from_passcode(passcode),
            (None, None) => {
                tracing::warn!(
                    "Neither ADMIN_PASSCODE nor ADMIN_PASSCODE_HASH is set. Admin login is disabled."
                );
                Ok(Self::disabled())
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.hash.is_some()
    }
}

impl PasscodeVerifier for Argon2PasscodeVerifier {
    fn verify(&self, passcode: &str) -> Result<(), AuthError> {
        let Some(hash) = self.hash.as_deref() else {
            tracing::warn!("Admin login attempted but no passcode is configured");
            return Err(AuthError::InvalidPasscode);
        };

        let parsed = PasswordHash::new(hash).map_err(|e| AuthError::HashingError(e.to_string()))?;

        self.argon2
            .verify_password(passcode.as_bytes(), &parsed)
            .map_err(|e| match e {
                HashError::Password => AuthError::InvalidPasscode,
                other => AuthError::HashingError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_passcode_is_hashed_and_verified() {
        let verifier = Argon2PasscodeVerifier::from_passcode("open-sesame").unwrap();

        assert!(verifier.is_enabled());
        assert!(verifier.verify("open-sesame").is_ok());
        assert!(matches!(
            verifier.verify("open-sesame "),
            Err(AuthError::InvalidPasscode)
        ));
        assert!(matches!(verifier.verify(""), Err(AuthError::InvalidPasscode)));
    }

    #[test]
    fn test_precomputed_hash_is_accepted() {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(b"letmein", &salt)
            .unwrap()
            .to_string();

        let verifier = Argon2PasscodeVerifier::from_hash(hash).unwrap();

        assert!(verifier.verify("letmein").is_ok());
        assert!(matches!(
            verifier.verify("let me in"),
            Err(AuthError::InvalidPasscode)
        ));
    }

    #[test]
    fn test_malformed_hash_is_rejected_up_front() {
        let result = Argon2PasscodeVerifier::from_hash("not-a-phc-string");
        assert!(matches!(result, Err(AuthError::HashingError(_))));
    }

    #[test]
    fn test_hash_takes_precedence_over_plain_passcode() {
        let hashed = Argon2PasscodeVerifier::from_passcode("from-hash").unwrap();
        let hash = hashed.hash.clone().unwrap();

        let verifier = Argon2PasscodeVerifier::from_config(Some(&hash), Some("plain")).unwrap();

        assert!(verifier.verify("from-hash").is_ok());
        assert!(verifier.verify("plain").is_err());
    }

    #[test]
    fn test_unconfigured_rejects_everything() {
        let verifier = Argon2PasscodeVerifier::from_config(None, None).unwrap();

        assert!(!verifier.is_enabled());
        assert!(matches!(verifier.verify(""), Err(AuthError::InvalidPasscode)));
        assert!(matches!(
            verifier.verify("anything"),
            Err(AuthError::InvalidPasscode)
        ));
    }
}
