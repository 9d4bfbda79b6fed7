use std::io::Cursor;

use image::{ColorType, DynamicImage, ImageFormat};
use leptess::LepTess;
use tracing::{debug, info, warn};

use crate::config::OcrConfig;

/// External recognition capability.
///
/// Implementations are synchronous and may block; callers are expected to
/// run them off the async executor. Errors are plain messages that end up in
/// the client-facing `detail`.
pub trait OcrEngine: Send + Sync {
    fn recognize(&self, image: &DynamicImage, language_code: &str) -> Result<String, String>;
}

/// Tesseract via leptess.
///
/// A fresh `LepTess` handle is created per call so no engine state is shared
/// between requests.
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    tessdata_dir: Option<String>,
}

impl TesseractEngine {
    pub fn new(config: &OcrConfig) -> Self {
        let engine = Self {
            tessdata_dir: config.tessdata_dir.clone(),
        };

        match engine.init("eng") {
            Ok(_) => info!(
                tessdata = config.tessdata_dir.as_deref().unwrap_or("<default>"),
                "Tesseract OCR initialized"
            ),
            Err(e) => warn!("Tesseract not available: {e} - OCR requests will fail"),
        }

        engine
    }

    fn init(&self, language_code: &str) -> Result<LepTess, String> {
        LepTess::new(self.tessdata_dir.as_deref(), language_code).map_err(|e| e.to_string())
    }
}

impl OcrEngine for TesseractEngine {
    fn recognize(&self, image: &DynamicImage, language_code: &str) -> Result<String, String> {
        let png = encode_png(image)?;

        let mut lt = self
            .init(language_code)
            .map_err(|e| format!("Failed to load language '{language_code}': {e}"))?;
        lt.set_image_from_mem(&png)
            .map_err(|e| format!("Failed to set image: {e}"))?;
        let text = lt
            .get_utf8_text()
            .map_err(|e| format!("Failed to extract text: {e}"))?;

        debug!(language = language_code, chars = text.len(), "Tesseract finished");
        Ok(text)
    }
}

/// Encode as PNG for leptonica. Float images (OpenEXR, Radiance HDR) have no
/// PNG color type and are converted to 8-bit RGBA first.
fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, String> {
    let mut png = Vec::new();
    let result = match image.color() {
        ColorType::Rgb32F | ColorType::Rgba32F => DynamicImage::ImageRgba8(image.to_rgba8())
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png),
        _ => image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png),
    };
    result.map_err(|e| format!("Failed to encode image: {e}"))?;
    Ok(png)
}
