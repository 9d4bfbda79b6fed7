use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use crate::error;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "OCR service",
        version = "1.0.0",
        description = "Optical character recognition over uploaded or base64-encoded images.",
    ),
    paths(
        handlers::health::health_check,
        handlers::ocr::ocr_upload,
        handlers::ocr::ocr_base64,
        handlers::convert::file_to_base64,
        handlers::languages::list_languages,
    ),
    components(schemas(
        error::ErrorBody,
        dto::HealthResponse,
        dto::OcrResponse,
        dto::FileToBase64Response,
        dto::LanguagesResponse,
        dto::OcrUploadForm,
        dto::OcrBase64Form,
        dto::FileUploadForm,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "ocr", description = "Text extraction from images"),
        (name = "convert", description = "File to base64 conversion"),
        (name = "languages", description = "Supported OCR languages"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
