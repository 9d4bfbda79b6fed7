pub mod convert;
pub mod health;
pub mod languages;
pub mod ocr;

pub use convert::file_to_base64;
pub use health::health_check;
pub use languages::list_languages;
pub use ocr::{ocr_base64, ocr_upload};
