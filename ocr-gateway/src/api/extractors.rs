use std::collections::HashMap;

use axum::extract::{Form, FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;

use crate::error::GatewayError;
use crate::ocr::SupportedLanguage;

/// One part of a submitted form.
#[derive(Debug, Clone)]
pub struct FormPart {
    pub filename: Option<String>,
    pub bytes: Vec<u8>,
}

/// Form fields from either a `multipart/form-data` or an
/// `application/x-www-form-urlencoded` body.
///
/// All parts are buffered; the request body limit bounds their total size.
#[derive(Debug)]
pub struct FormData {
    parts: HashMap<String, FormPart>,
}

impl<S> FromRequest<S> for FormData
where
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state).await.map_err(|e| {
                GatewayError::InvalidInput(format!("Invalid multipart body: {e}"))
            })?;
            Self::from_multipart(multipart).await
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| GatewayError::InvalidInput(format!("Invalid form body: {e}")))?;
            Ok(Self::from_fields(fields))
        } else {
            Err(GatewayError::InvalidInput(
                "Expected a multipart/form-data or application/x-www-form-urlencoded body"
                    .to_string(),
            ))
        }
    }
}

impl FormData {
    async fn from_multipart(mut multipart: Multipart) -> Result<Self, GatewayError> {
        let mut parts = HashMap::new();

        loop {
            let field = match multipart.next_field().await {
                Ok(Some(field)) => field,
                Ok(None) => break,
                Err(e) => {
                    return Err(GatewayError::InvalidInput(format!(
                        "Failed to read multipart body: {e}"
                    )))
                }
            };

            let name = field.name().unwrap_or("").to_string();
            let filename = field.file_name().map(str::to_string);
            let bytes = field.bytes().await.map_err(|e| {
                GatewayError::InvalidInput(format!("Failed to read field '{name}': {e}"))
            })?;

            parts.insert(
                name,
                FormPart {
                    filename,
                    bytes: bytes.to_vec(),
                },
            );
        }

        Ok(Self { parts })
    }

    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        let parts = fields
            .into_iter()
            .map(|(name, value)| {
                (
                    name,
                    FormPart {
                        filename: None,
                        bytes: value.into_bytes(),
                    },
                )
            })
            .collect();
        Self { parts }
    }

    pub fn part(&self, name: &str) -> Option<&FormPart> {
        self.parts.get(name)
    }

    pub fn require_file(&self, name: &str) -> Result<&FormPart, GatewayError> {
        self.part(name)
            .ok_or_else(|| GatewayError::InvalidInput(format!("Missing required field: {name}")))
    }

    pub fn require_text(&self, name: &str) -> Result<&str, GatewayError> {
        let part = self.require_file(name)?;
        std::str::from_utf8(&part.bytes)
            .map_err(|_| GatewayError::InvalidInput(format!("Field '{name}' must be UTF-8 text")))
    }

    /// The `language` selector, resolved against the supported set.
    pub fn language(&self) -> Result<SupportedLanguage, GatewayError> {
        self.require_text("language")?.parse()
    }
}
