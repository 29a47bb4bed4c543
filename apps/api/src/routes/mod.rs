pub mod health;
pub mod pages;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::recommendation::handlers::handle_recommend;
use crate::search::handlers::handle_search;
use crate::session::{self, handlers as session_handlers};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(pages::home_page))
        .route(
            session::LOGIN_PATH,
            get(pages::login_page).post(session_handlers::handle_login),
        )
        .route("/logout", get(session_handlers::handle_logout))
        // API, left open by the gate
        .route("/api/health", get(health::health_handler))
        .route("/api/recommend", post(handle_recommend))
        .route("/api/search", get(handle_search))
        .nest_service(session::STATIC_PREFIX, static_files)
        .fallback(pages::not_found)
        // Layered after the fallback so unknown paths are gated too
        .layer(middleware::from_fn(session::require_session))
        .with_state(state)
}
