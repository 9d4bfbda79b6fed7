use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::openapi;
use super::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let max_upload_bytes = state.config.server.max_upload_bytes;

    Router::new()
        .route("/", get(handlers::health_check))
        .route("/ocr", post(handlers::ocr_upload))
        .route("/ocr_base64", post(handlers::ocr_base64))
        .route("/file-to-base64", post(handlers::file_to_base64))
        .route("/languages/", get(handlers::list_languages))
        .route("/languages", get(handlers::list_languages))
        .route("/openapi.json", get(openapi::openapi_json))
        .merge(openapi::redoc_router())
        // Multipart otherwise applies axum's own 2 MB default.
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_upload_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
