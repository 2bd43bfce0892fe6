//! Admin session implementations.

mod jwt;
mod passcode;

pub use jwt::{JwtConfig, JwtTokenService};
pub use passcode::Argon2PasscodeVerifier;
