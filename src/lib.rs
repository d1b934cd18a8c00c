use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

pub mod config;
pub mod errors;
pub mod http;
pub mod logging;
pub mod store;
pub mod timer;

use store::TimerStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TimerStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn TimerStore>) -> Self {
        Self { store }
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route(
            "/timers",
            get(http::handlers::list_timers)
                .head(http::handlers::not_found)
                .fallback(http::handlers::not_found),
        )
        .route(
            "/timer",
            post(http::handlers::create_timer).fallback(http::handlers::not_found),
        )
        .fallback(http::handlers::not_found)
        .layer(middleware::from_fn(http::cors::permissive_cors))
        .layer(middleware::from_fn(logging::request_logging_middleware))
        .with_state(state)
}
