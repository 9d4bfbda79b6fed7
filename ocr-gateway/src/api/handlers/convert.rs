use axum::Json;
use tracing::info;

use crate::api::dto::{FileToBase64Response, FileUploadForm};
use crate::api::extractors::FormData;
use crate::error::{ErrorBody, Result};
use crate::ocr::encode_base64;

/// `POST /file-to-base64`
///
/// Plain encoding utility; the upload is not required to be an image and no
/// OCR is performed.
#[utoipa::path(
    post,
    path = "/file-to-base64",
    tag = "convert",
    request_body(content = FileUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Base64 encoding of the uploaded file", body = FileToBase64Response),
        (status = 400, description = "Missing or unreadable file", body = ErrorBody),
    )
)]
pub async fn file_to_base64(form: FormData) -> Result<Json<FileToBase64Response>> {
    let file = form.require_file("file")?;

    info!(
        filename = file.filename.as_deref().unwrap_or("<none>"),
        bytes = file.bytes.len(),
        "Encoding upload as base64"
    );

    Ok(Json(FileToBase64Response {
        filename: file.filename.clone(),
        base64_string: encode_base64(&file.bytes),
    }))
}
