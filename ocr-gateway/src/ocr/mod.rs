//! OCR (Optical Character Recognition) Module
//!
//! Everything the gateway needs to turn client input into extracted text:
//! - `SupportedLanguage` is the closed set of languages clients may select
//! - `decode` turns upload bytes or base64 text into a `DynamicImage`
//! - `OcrEngine` is the seam to the external recognizer, with
//!   `TesseractEngine` implementing it via leptess
//! - `OcrProvider` runs the blocking engine call on the blocking pool under
//!   a per-request timeout
//!
//! # Usage
//!
//! ```rust,ignore
//! let ocr = OcrProvider::new(&config.ocr);
//! let image = decode_image(&bytes)?;
//! let text = ocr.recognize(image, SupportedLanguage::English).await?;
//! ```

mod decode;
mod engine;
mod language;
mod provider;

pub use decode::{decode_base64, decode_image, encode_base64};
pub use engine::{OcrEngine, TesseractEngine};
pub use language::{LanguageTable, SupportedLanguage};
pub use provider::OcrProvider;
