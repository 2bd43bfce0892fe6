//! Admin session handlers.

use actix_web::{HttpResponse, web};

use blog_core::ports::AuthError;
use blog_shared::MessageResponse;
use blog_shared::dto::LoginRequest;

use crate::middleware::auth::AdminSession;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/admin/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    state.passcode.verify(&body.passcode).inspect_err(|e| {
        if matches!(e, AuthError::InvalidPasscode) {
            tracing::warn!("Admin login rejected");
        }
    })?;

    let token = state
        .tokens
        .issue_admin_token()
        .map_err(|e| AppError::Internal(e.to_string()))?;
    let cookie = state
        .session
        .session_cookie(token, state.tokens.expiration_seconds());

    tracing::info!("Admin session opened");

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(MessageResponse::new("Logged in")))
}

/// GET /api/admin/protected - reports whether the caller holds an admin session
pub async fn protected(_admin: AdminSession) -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("Authorized"))
}

/// GET /api/admin/logout
pub async fn logout(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .cookie(state.session.removal_cookie())
        .json(MessageResponse::new("Logged out"))
}
