//! Session gate: a single shared password, remembered by one opaque cookie.
//!
//! The cookie carries no identity and is not signed. Any non-empty value counts
//! as a session; the HttpOnly / SameSite=Strict / Secure attributes are what keep
//! it server-controlled.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::{Duration, OffsetDateTime};
use tracing::debug;

pub mod handlers;

pub const SESSION_COOKIE: &str = "promptloom-session";
pub const SESSION_VALUE: &str = "authenticated";
pub const LOGIN_PATH: &str = "/login";
pub const STATIC_PREFIX: &str = "/static";
/// API routes are left open on purpose.
pub const API_PREFIX: &str = "/api";
const SESSION_MAX_AGE_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Pass,
    RedirectToLogin,
}

/// Decides whether a request may proceed.
///
/// The login page, static assets and everything under `/api` always pass.
/// Other paths pass only with a non-empty session cookie.
pub fn gate(path: &str, session: Option<&str>) -> GateDecision {
    if path == LOGIN_PATH || path.starts_with(STATIC_PREFIX) || path.starts_with(API_PREFIX) {
        return GateDecision::Pass;
    }

    match session {
        Some(value) if !value.is_empty() => GateDecision::Pass,
        _ => GateDecision::RedirectToLogin,
    }
}

/// Middleware applied to the whole router. Redirects with 303 so the follow-up is a GET.
pub async fn require_session(jar: CookieJar, request: Request, next: Next) -> Response {
    let session = jar.get(SESSION_COOKIE).map(|c| c.value());

    match gate(request.uri().path(), session) {
        GateDecision::Pass => next.run(request).await,
        GateDecision::RedirectToLogin => {
            debug!(
                "No session for {}, redirecting to {LOGIN_PATH}",
                request.uri().path()
            );
            Redirect::to(LOGIN_PATH).into_response()
        }
    }
}

/// The cookie set after a successful login.
pub fn session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, SESSION_VALUE))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(secure)
        .max_age(Duration::days(SESSION_MAX_AGE_DAYS))
        .build()
}

/// An empty, already-expired session cookie that overwrites the real one.
pub fn cleared_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .expires(OffsetDateTime::UNIX_EPOCH)
        .build()
}
