//! Login and logout.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::session::{cleared_session_cookie, session_cookie, LOGIN_PATH};
use crate::state::AppState;

pub const INVALID_PASSWORD: &str = "Invalid password";

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginFailure {
    pub success: bool,
    pub message: &'static str,
}

/// POST /login
///
/// Correct password: session cookie + 303 to `/`. Anything else: a failure body, no cookie.
/// No lockout and no attempt counting.
pub async fn handle_login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    if form.password == state.config.shared_password {
        info!("Login succeeded");
        let jar = jar.add(session_cookie(state.config.is_production()));
        return (jar, Redirect::to("/")).into_response();
    }

    warn!("Login rejected: invalid password");
    Json(LoginFailure {
        success: false,
        message: INVALID_PASSWORD,
    })
    .into_response()
}

/// GET /logout
pub async fn handle_logout(jar: CookieJar) -> (CookieJar, Redirect) {
    info!("Session cleared");
    (jar.add(cleared_session_cookie()), Redirect::to(LOGIN_PATH))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::test_config;
    use crate::routes::build_router;
    use crate::session::SESSION_COOKIE;
    use crate::state::test_support::{default_state, state_with, StubCompleter, StubSearch};

    fn login_request(password: &str) -> Request<Body> {
        Request::post("/login")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(format!("password={password}")))
            .unwrap()
    }

    fn set_cookie(response: &Response) -> String {
        response
            .headers()
            .get(header::SET_COOKIE)
            .expect("set-cookie header")
            .to_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_login_with_correct_password_sets_cookie_and_redirects_home() {
        let response = build_router(default_state())
            .oneshot(login_request("hunter2"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
        let cookie = set_cookie(&response);
        assert!(cookie.starts_with(&format!("{SESSION_COOKIE}=authenticated")));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=604800"));
        assert!(!cookie.contains("Secure"));
    }

    #[tokio::test]
    async fn test_login_in_production_marks_cookie_secure() {
        let mut config = test_config();
        config.app_env = "production".to_string();
        let state = state_with(
            config,
            std::sync::Arc::new(StubCompleter::replying("{}")),
            std::sync::Arc::new(StubSearch::replying(serde_json::json!({}))),
        );

        let response = build_router(state)
            .oneshot(login_request("hunter2"))
            .await
            .unwrap();

        assert!(set_cookie(&response).contains("Secure"));
    }

    #[tokio::test]
    async fn test_login_with_wrong_password_reports_failure_without_cookie() {
        let response = build_router(default_state())
            .oneshot(login_request("letmein"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], INVALID_PASSWORD);
    }

    #[tokio::test]
    async fn test_login_without_password_field_fails() {
        let response = build_router(default_state())
            .oneshot(
                Request::post("/login")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_cookie_and_redirects_to_login() {
        let response = build_router(default_state())
            .oneshot(
                Request::get("/logout")
                    .header(header::COOKIE, format!("{SESSION_COOKIE}=authenticated"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/login");
        let cookie = set_cookie(&response);
        assert!(cookie.starts_with(&format!("{SESSION_COOKIE}=;")));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("Path=/"));
    }
}
