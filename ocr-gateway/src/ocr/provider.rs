use std::sync::Arc;
use std::time::Duration;

use image::DynamicImage;
use tracing::debug;

use crate::config::OcrConfig;
use crate::error::{GatewayError, Result};

use super::engine::{OcrEngine, TesseractEngine};
use super::language::SupportedLanguage;

/// Runs the blocking engine on the blocking pool, bounded by a timeout.
#[derive(Clone)]
pub struct OcrProvider {
    engine: Arc<dyn OcrEngine>,
    timeout: Duration,
}

impl OcrProvider {
    pub fn new(config: &OcrConfig) -> Self {
        Self::with_engine(Arc::new(TesseractEngine::new(config)), config)
    }

    pub fn with_engine(engine: Arc<dyn OcrEngine>, config: &OcrConfig) -> Self {
        Self {
            engine,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    pub async fn recognize(
        &self,
        image: DynamicImage,
        language: SupportedLanguage,
    ) -> Result<String> {
        let engine = Arc::clone(&self.engine);
        let task = tokio::task::spawn_blocking(move || engine.recognize(&image, language.code()));

        let text = match tokio::time::timeout(self.timeout, task).await {
            Ok(Ok(Ok(text))) => text,
            Ok(Ok(Err(e))) => {
                return Err(GatewayError::Engine(format!("Error during OCR: {e}")))
            }
            Ok(Err(e)) => {
                return Err(GatewayError::Engine(format!(
                    "Error during OCR: task panicked: {e}"
                )))
            }
            Err(_) => {
                return Err(GatewayError::Engine(format!(
                    "Error during OCR: timed out after {} seconds",
                    self.timeout.as_secs()
                )))
            }
        };

        debug!(language = %language, chars = text.len(), "OCR complete");
        Ok(text)
    }
}
