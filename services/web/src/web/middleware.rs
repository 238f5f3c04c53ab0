//! services/web/src/web/middleware.rs
//!
//! The guard in front of every admin route.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tracing::debug;

use crate::web::state::AppState;

pub const LOGIN_PATH: &str = "/admin/login";

/// Middleware that checks the session flag on every request.
///
/// If set, the request continues. Otherwise the browser is redirected to the login page.
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let session = state.session_keys.session_from_headers(req.headers());
    if !session.is_authenticated() {
        debug!(path = %req.uri().path(), "Unauthenticated admin request, redirecting to login");
        return Redirect::to(LOGIN_PATH).into_response();
    }

    next.run(req).await
}
