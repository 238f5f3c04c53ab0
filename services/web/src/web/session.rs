//! services/web/src/web/session.rs
//!
//! The admin session: a single "logged in" flag carried in a signed cookie.
//!
//! The cookie value is `base64url(json) "." base64url(hmac_sha256(json))`. A cookie
//! whose signature does not verify is treated exactly like a missing one.

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::{debug, error};

use crate::config::ConfigError;
use crate::web::state::AppState;

type HmacSha256 = Hmac<Sha256>;

pub const SESSION_COOKIE: &str = "sitio_session";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct SessionPayload {
    logged_in: bool,
}

/// Signs and verifies session cookies with the server secret.
///
/// Rotating the secret invalidates every outstanding session.
#[derive(Clone)]
pub struct SessionKeys {
    mac: HmacSha256,
    secure: bool,
}

impl SessionKeys {
    pub fn new(secret: &[u8], secure: bool) -> Result<Self, ConfigError> {
        let mac = HmacSha256::new_from_slice(secret).map_err(|e| {
            ConfigError::InvalidValue("SESSION_SECRET".to_string(), e.to_string())
        })?;
        Ok(Self { mac, secure })
    }

    fn encode(&self, payload: SessionPayload) -> Option<String> {
        let json = serde_json::to_vec(&payload)
            .map_err(|e| error!("Failed to serialize session payload: {:?}", e))
            .ok()?;
        let mut mac = self.mac.clone();
        mac.update(&json);
        let signature = mac.finalize().into_bytes();
        Some(format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(&json),
            URL_SAFE_NO_PAD.encode(signature)
        ))
    }

    fn decode(&self, value: &str) -> Option<SessionPayload> {
        let (json, signature) = value.split_once('.')?;
        let json = URL_SAFE_NO_PAD.decode(json).ok()?;
        let signature = URL_SAFE_NO_PAD.decode(signature).ok()?;

        let mut mac = self.mac.clone();
        mac.update(&json);
        if mac.verify_slice(&signature).is_err() {
            debug!("Rejected session cookie with a bad signature");
            return None;
        }
        serde_json::from_slice(&json).ok()
    }

    /// Reads the session carried by the request's `Cookie` header.
    pub fn session_from_headers(&self, headers: &HeaderMap) -> AdminSession {
        let logged_in = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(';'))
            .find_map(|c| {
                let c = c.trim();
                c.strip_prefix(SESSION_COOKIE)
                    .and_then(|rest| rest.strip_prefix('='))
            })
            .and_then(|value| self.decode(value))
            .map(|payload| payload.logged_in)
            .unwrap_or(false);
        AdminSession { logged_in }
    }

    /// `Set-Cookie` value that marks the browser session as logged in.
    ///
    /// No `Max-Age` is set, so the flag ends with the browser session.
    pub fn login_cookie(&self) -> Option<String> {
        let value = self.encode(SessionPayload { logged_in: true })?;
        Some(format!("{}={}; {}", SESSION_COOKIE, value, self.attributes()))
    }

    /// `Set-Cookie` value that clears the session flag.
    pub fn logout_cookie(&self) -> String {
        format!("{}=; {}; Max-Age=0", SESSION_COOKIE, self.attributes())
    }

    fn attributes(&self) -> &'static str {
        if self.secure {
            "HttpOnly; Secure; SameSite=Lax; Path=/"
        } else {
            "HttpOnly; SameSite=Lax; Path=/"
        }
    }
}

/// The per-request view of the session, handed to handlers that need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminSession {
    logged_in: bool,
}

impl AdminSession {
    pub fn is_authenticated(&self) -> bool {
        self.logged_in
    }
}

impl FromRequestParts<Arc<AppState>> for AdminSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        Ok(state.session_keys.session_from_headers(&parts.headers))
    }
}

/// Compares a submitted password with the configured one in constant time.
pub fn password_matches(expected: &str, candidate: &str) -> bool {
    expected.as_bytes().ct_eq(candidate.as_bytes()).into()
}
