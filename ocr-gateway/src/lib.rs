//! HTTP gateway exposing Tesseract OCR over uploaded or base64-encoded images.

pub mod api;
pub mod config;
pub mod error;
pub mod ocr;
