use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::types::AppState;

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/classes", post(handlers::classes::create_class))
        .route(
            "/api/classes/{class_id}/import",
            post(handlers::roster::import_roster),
        )
        .route(
            "/api/classes/{class_id}/attendance",
            post(handlers::attendance::mark_attendance),
        )
        .route(
            "/api/classes/{class_id}/present",
            get(handlers::attendance::present_today),
        )
        .route(
            "/api/classes/{class_id}/absent",
            get(handlers::attendance::absent_today),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
