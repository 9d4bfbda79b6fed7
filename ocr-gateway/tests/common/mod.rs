#![allow(dead_code)]

use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use tower::ServiceExt;

use ocr_gateway::api::{create_router, AppState};
use ocr_gateway::config::{Config, OcrConfig, ServerConfig, DEFAULT_MAX_UPLOAD_BYTES};
use ocr_gateway::ocr::{OcrEngine, OcrProvider};

pub const BOUNDARY: &str = "ocr-gateway-test-boundary";

/// Engine double that records every call.
pub struct MockEngine {
    outcome: Result<String, String>,
    calls: AtomicUsize,
    languages: Mutex<Vec<String>>,
}

impl MockEngine {
    pub fn returning(text: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
            languages: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(message.to_string()),
            calls: AtomicUsize::new(0),
            languages: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn languages(&self) -> Vec<String> {
        self.languages.lock().unwrap().clone()
    }
}

impl OcrEngine for MockEngine {
    fn recognize(&self, _image: &DynamicImage, language_code: &str) -> Result<String, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.languages
            .lock()
            .unwrap()
            .push(language_code.to_string());
        self.outcome.clone()
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 7000,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        },
        ocr: OcrConfig {
            tessdata_dir: None,
            timeout_secs: 5,
        },
    }
}

pub fn build_app(engine: Arc<MockEngine>) -> Router {
    build_app_with_config(engine, test_config())
}

pub fn build_app_with_config(engine: Arc<MockEngine>, config: Config) -> Router {
    let ocr = OcrProvider::with_engine(engine, &config.ocr);
    create_router(AppState::new(config, ocr))
}

/// A small white JPEG.
pub fn sample_jpeg() -> Vec<u8> {
    let img = RgbImage::from_pixel(32, 16, Rgb([255, 255, 255]));
    let mut out = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut out), ImageFormat::Jpeg)
        .expect("Failed to encode JPEG fixture");
    out
}

/// A small white PNG.
pub fn sample_png() -> Vec<u8> {
    let img = RgbImage::from_pixel(32, 16, Rgb([255, 255, 255]));
    let mut out = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
        .expect("Failed to encode PNG fixture");
    out
}

pub enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, Option<&'a str>, &'a [u8]),
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File(name, filename, bytes) => {
                let disposition = match filename {
                    Some(filename) => format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n"
                    ),
                    None => format!("Content-Disposition: form-data; name=\"{name}\"\r\n"),
                };
                body.extend_from_slice(disposition.as_bytes());
                body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_request(uri: &str, parts: &[Part<'_>]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

pub fn urlencoded_request(uri: &str, pairs: &[(&str, &str)]) -> Request<Body> {
    let body = serde_urlencoded::to_string(pairs).expect("Failed to encode form fields");

    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Sends a request and parses the JSON body (`Null` when the body is not JSON).
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}
