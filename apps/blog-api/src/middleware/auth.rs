//! Admin session extractor.

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use std::future::{Ready, ready};

use blog_core::ports::AuthError;

use crate::state::AppState;

/// Proof that the request carries a valid admin session cookie.
///
/// Take it as the first argument of any handler that mutates the store:
/// ```ignore
/// async fn delete_post(_admin: AdminSession, ...) -> AppResult<HttpResponse> {
///     ...
/// }
/// ```
/// When the session is missing, expired, forged or not an admin session the
/// request is answered with 401 before the handler body runs.
#[derive(Debug, Clone)]
pub struct AdminSession {
    _private: (),
}

/// Error type for authentication failures.
#[derive(Debug)]
pub struct AuthenticationError(pub AuthError);

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl actix_web::ResponseError for AuthenticationError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match &self.0 {
            AuthError::HashingError(_) => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
            _ => actix_web::http::StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        use blog_shared::ErrorResponse;

        let error = match &self.0 {
            AuthError::TokenExpired => ErrorResponse::new(401, "Session Expired")
                .with_detail("Your admin session has expired. Please login again."),
            AuthError::InvalidToken(msg) => {
                ErrorResponse::new(401, "Invalid Session").with_detail(msg.clone())
            }
            AuthError::MissingSession => ErrorResponse::new(401, "Authentication Required")
                .with_detail("Login with the admin passcode first."),
            AuthError::NotAdmin | AuthError::InvalidPasscode => ErrorResponse::unauthorized(),
            AuthError::HashingError(_) => ErrorResponse::internal_error(),
        };

        actix_web::HttpResponse::build(self.status_code()).json(error)
    }
}

impl AdminSession {
    fn authenticate(req: &HttpRequest) -> Result<Self, AuthError> {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            tracing::error!("AppState not found in app data");
            return Err(AuthError::InvalidToken(
                "Server configuration error".to_string(),
            ));
        };

        let cookie = req
            .cookie(&state.session.name)
            .filter(|c| !c.value().is_empty())
            .ok_or(AuthError::MissingSession)?;

        let claims = state.tokens.validate_token(cookie.value())?;
        if !claims.admin {
            return Err(AuthError::NotAdmin);
        }

        Ok(Self { _private: () })
    }
}

impl FromRequest for AdminSession {
    type Error = AuthenticationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::authenticate(req).map_err(|e| {
            tracing::debug!(error = %e, path = %req.path(), "Admin session rejected");
            AuthenticationError(e)
        }))
    }
}
