use axum::extract::State;
use axum::Json;
use tracing::{debug, info};

use crate::api::dto::{OcrBase64Form, OcrResponse, OcrUploadForm};
use crate::api::extractors::FormData;
use crate::api::state::AppState;
use crate::error::{ErrorBody, GatewayError, Result};
use crate::ocr::{decode_base64, decode_image};

pub const UPLOAD_ERROR: &str = "Could not process the uploaded file.";
pub const BASE64_ERROR: &str = "Could not process the base64 string.";

/// `POST /ocr`
///
/// Reads the `file` and `language` multipart fields. The language is
/// validated before the upload is decoded, so an unknown selector never
/// reaches the engine.
#[utoipa::path(
    post,
    path = "/ocr",
    tag = "ocr",
    request_body(content = OcrUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Text extracted from the image", body = OcrResponse),
        (status = 400, description = "Missing field, unknown language or undecodable image", body = ErrorBody),
        (status = 500, description = "OCR engine failure", body = ErrorBody),
    )
)]
pub async fn ocr_upload(
    State(state): State<AppState>,
    form: FormData,
) -> Result<Json<OcrResponse>> {
    let file = form.require_file("file")?;
    let language = form.language()?;

    let image = decode_image(&file.bytes).map_err(|e| {
        debug!(error = %e, "Upload is not a decodable image");
        GatewayError::InvalidInput(UPLOAD_ERROR.to_string())
    })?;

    let extracted_text = state.ocr.recognize(image, language).await?;

    info!(
        language = %language,
        bytes = file.bytes.len(),
        chars = extracted_text.len(),
        "OCR on upload complete"
    );

    Ok(Json(OcrResponse::new(language, extracted_text)))
}

/// `POST /ocr_base64`
///
/// Same as `/ocr`, with the image supplied as the `base64_string` form field.
#[utoipa::path(
    post,
    path = "/ocr_base64",
    tag = "ocr",
    request_body(
        content = OcrBase64Form,
        content_type = "application/x-www-form-urlencoded",
        description = "Also accepted as multipart/form-data"
    ),
    responses(
        (status = 200, description = "Text extracted from the image", body = OcrResponse),
        (status = 400, description = "Missing field, unknown language, invalid base64 or undecodable image", body = ErrorBody),
        (status = 500, description = "OCR engine failure", body = ErrorBody),
    )
)]
pub async fn ocr_base64(
    State(state): State<AppState>,
    form: FormData,
) -> Result<Json<OcrResponse>> {
    let encoded = form.require_text("base64_string")?;
    let language = form.language()?;

    let image = decode_base64(encoded)
        .and_then(|bytes| decode_image(&bytes))
        .map_err(|e| {
            debug!(error = %e, "base64_string is not an encoded image");
            GatewayError::InvalidInput(BASE64_ERROR.to_string())
        })?;

    let extracted_text = state.ocr.recognize(image, language).await?;

    info!(
        language = %language,
        chars = extracted_text.len(),
        "OCR on base64 image complete"
    );

    Ok(Json(OcrResponse::new(language, extracted_text)))
}
