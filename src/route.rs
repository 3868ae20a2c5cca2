use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::handler::{
    create_match_handler, delete_match_handler, get_match_by_id_handler, get_matches_handler,
    index_handler, not_found_handler, update_match_handler,
};
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE]);

    let trace_layer =
        TraceLayer::new_for_http().on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(index_handler))
        .route(
            "/v1/match",
            get(get_matches_handler).post(create_match_handler),
        )
        .route(
            "/v1/match/:match_id",
            get(get_match_by_id_handler)
                .patch(update_match_handler)
                .put(update_match_handler)
                .delete(delete_match_handler),
        )
        .fallback(not_found_handler)
        .layer(cors)
        .layer(trace_layer)
        .with_state(state)
}
