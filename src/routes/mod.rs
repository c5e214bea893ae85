use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::{apply_security_headers, create_cors_layer, Config};
use crate::handlers::events::{create_event, delete_event, get_event, list_events, list_today};
use crate::handlers::health_check;
use crate::AppState;


pub fn create_routes(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .route("/health", get(health_check))
        .route("/event", get(list_events).post(create_event))
        .route("/event/today", get(list_today))
        .route("/event/:event_id", get(get_event).delete(delete_event))
        .with_state(state);

    apply_security_headers(router, config.production)
        .layer(create_cors_layer(config.cors_allowed_origins.as_deref()))
        .layer(TraceLayer::new_for_http())
}
