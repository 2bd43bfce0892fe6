//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod repository;

pub use auth::{AuthError, PasscodeVerifier, SessionClaims, TokenService};
pub use repository::{BaseRepository, PostRepository};
