mod leave;
mod root;
mod shift;

use crate::{config::Config, state::AppState};
use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

pub fn app(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/", get(root::health))
        .nest("/leave", leave::new(state.clone()))
        .nest("/shift", shift::new())
        .fallback(root::fallback)
        .layer(
            // see https://docs.rs/tower-http/latest/tower_http/cors/index.html
            // for more details
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_origin(config.cors_origins.clone())
                .allow_headers([CONTENT_TYPE, AUTHORIZATION]),
        )
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
