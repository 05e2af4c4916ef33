pub mod error;
pub mod handlers;
pub mod pages;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use state::SharedState;
use tower_http::trace::TraceLayer;

pub fn app(state: SharedState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        .route("/post/:uid", get(handlers::post_detail))
        .route(
            "/api/posts",
            post(handlers::load_more).fallback(handlers::method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
