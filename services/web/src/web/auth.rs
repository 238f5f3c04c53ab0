//! services/web/src/web/auth.rs
//!
//! Admin login and logout.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use minijinja::context;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::web::middleware::LOGIN_PATH;
use crate::web::session::{password_matches, AdminSession};
use crate::web::state::AppState;

pub const WRONG_PASSWORD: &str = "Contraseña incorrecta.";

const ADMIN_INDEX_PATH: &str = "/admin/";

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub password: String,
}

/// GET /admin/login
///
/// An already logged-in browser is sent straight to the admin index.
pub async fn login_page(
    State(state): State<Arc<AppState>>,
    session: AdminSession,
) -> Result<Response, (StatusCode, String)> {
    if session.is_authenticated() {
        return Ok(Redirect::to(ADMIN_INDEX_PATH).into_response());
    }
    Ok(state
        .views
        .render("admin/login.html", context! {})?
        .into_response())
}

/// POST /admin/login
///
/// On a match the session flag is set and the browser goes to the admin index. A
/// wrong password re-renders the form with an error and leaves the session untouched.
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> Result<Response, (StatusCode, String)> {
    if !password_matches(&state.config.admin_password, &form.password) {
        warn!("Admin login failed");
        let page = state
            .views
            .render("admin/login.html", context! { error => WRONG_PASSWORD })?;
        return Ok(page.into_response());
    }

    let cookie = state.session_keys.login_cookie().ok_or_else(|| {
        error!("Failed to issue session cookie");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error interno del servidor.".to_string(),
        )
    })?;

    info!("Admin logged in");
    Ok(([(header::SET_COOKIE, cookie)], Redirect::to(ADMIN_INDEX_PATH)).into_response())
}

/// GET /admin/logout and GET /admin/cerrar
///
/// Always clears the session flag, logged in or not.
pub async fn logout_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    info!("Admin logged out");
    (
        [(header::SET_COOKIE, state.session_keys.logout_cookie())],
        Redirect::to(LOGIN_PATH),
    )
}
