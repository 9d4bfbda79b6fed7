//! Wire types for the gateway endpoints.
//!
//! Field names are snake_case on the wire and must stay stable: existing
//! clients parse `extracted_text`, `base64_string` and `supported_languages`
//! directly.

use serde::Serialize;

use crate::ocr::{LanguageTable, SupportedLanguage};

pub const HEALTH_MESSAGE: &str = "OCR Service is running!";

/// `GET /` payload.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub message: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            message: HEALTH_MESSAGE.to_string(),
        }
    }
}

/// Result of a recognition call.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct OcrResponse {
    /// Display name of the language used, e.g. `"English"`.
    #[schema(example = "English")]
    pub language: String,
    /// Text as returned by the engine, untrimmed.
    pub extracted_text: String,
}

impl OcrResponse {
    pub fn new(language: SupportedLanguage, extracted_text: String) -> Self {
        Self {
            language: language.name().to_string(),
            extracted_text,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct FileToBase64Response {
    /// Client-supplied filename, `null` when the part carried none.
    pub filename: Option<String>,
    /// Standard, padded base64 of the uploaded bytes.
    pub base64_string: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct LanguagesResponse {
    /// Display name to engine code, in advertised order.
    #[schema(value_type = Object)]
    pub supported_languages: LanguageTable,
}

impl Default for LanguagesResponse {
    fn default() -> Self {
        Self {
            supported_languages: LanguageTable,
        }
    }
}

// Request bodies below are documentation-only; handlers read them through
// `FormData`.

/// `POST /ocr` multipart body.
#[derive(Debug, utoipa::ToSchema)]
#[allow(dead_code)]
pub struct OcrUploadForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    /// Engine code (`eng`) or display name (`English`).
    #[schema(example = "eng")]
    pub language: String,
}

/// `POST /ocr_base64` form body (urlencoded or multipart).
#[derive(Debug, utoipa::ToSchema)]
#[allow(dead_code)]
pub struct OcrBase64Form {
    pub base64_string: String,
    #[schema(example = "eng")]
    pub language: String,
}

/// `POST /file-to-base64` multipart body.
#[derive(Debug, utoipa::ToSchema)]
#[allow(dead_code)]
pub struct FileUploadForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
