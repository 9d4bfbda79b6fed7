use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine};
use image::{DynamicImage, ImageReader};

use crate::error::{GatewayError, Result};

/// Decode raw upload bytes into an image, sniffing the format from content.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    if bytes.is_empty() {
        return Err(GatewayError::InvalidInput("Image data is empty".to_string()));
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| GatewayError::InvalidInput(format!("Failed to read image: {e}")))?;

    if reader.format().is_none() {
        return Err(GatewayError::InvalidInput(
            "Unrecognized image format".to_string(),
        ));
    }

    reader
        .decode()
        .map_err(|e| GatewayError::InvalidInput(format!("Failed to decode image: {e}")))
}

/// Decode a base64 payload into bytes.
///
/// Accepts line-wrapped input and an optional `data:<mime>;base64,` prefix.
pub fn decode_base64(input: &str) -> Result<Vec<u8>> {
    let payload = strip_data_url(input.trim());
    let compact: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| GatewayError::InvalidInput(format!("Invalid base64: {e}")))
}

pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

fn strip_data_url(input: &str) -> &str {
    if !input.starts_with("data:") {
        return input;
    }
    match input.split_once(";base64,") {
        Some((_, payload)) => payload,
        None => input,
    }
}
