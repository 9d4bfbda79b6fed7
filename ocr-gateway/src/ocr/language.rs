use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::GatewayError;

/// Languages the gateway accepts and advertises.
///
/// The set is closed: each variant pairs a display name with the Tesseract
/// engine code passed to `recognize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedLanguage {
    English,
    Spanish,
    Arabic,
    French,
    German,
    Farsi,
}

impl SupportedLanguage {
    /// All languages in advertised order.
    pub const ALL: [SupportedLanguage; 6] = [
        SupportedLanguage::English,
        SupportedLanguage::Spanish,
        SupportedLanguage::Arabic,
        SupportedLanguage::French,
        SupportedLanguage::German,
        SupportedLanguage::Farsi,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SupportedLanguage::English => "English",
            SupportedLanguage::Spanish => "Spanish",
            SupportedLanguage::Arabic => "Arabic",
            SupportedLanguage::French => "French",
            SupportedLanguage::German => "German",
            SupportedLanguage::Farsi => "Farsi",
        }
    }

    /// ISO 639-2 code understood by Tesseract.
    pub fn code(&self) -> &'static str {
        match self {
            SupportedLanguage::English => "eng",
            SupportedLanguage::Spanish => "spa",
            SupportedLanguage::Arabic => "ara",
            SupportedLanguage::French => "fra",
            SupportedLanguage::German => "deu",
            SupportedLanguage::Farsi => "fas",
        }
    }

    /// Resolve a client selector, matching either the engine code or the
    /// display name, ignoring case and surrounding whitespace.
    pub fn from_selector(selector: &str) -> Option<Self> {
        let selector = selector.trim();
        Self::ALL.into_iter().find(|lang| {
            lang.code().eq_ignore_ascii_case(selector) || lang.name().eq_ignore_ascii_case(selector)
        })
    }
}

impl fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SupportedLanguage {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_selector(s).ok_or_else(|| {
            let accepted = Self::ALL
                .iter()
                .map(|lang| lang.code())
                .collect::<Vec<_>>()
                .join(", ");
            GatewayError::InvalidInput(format!(
                "Unsupported language '{}'. Expected one of: {accepted}",
                s.trim()
            ))
        })
    }
}

/// Serializes as an ordered `{name: code}` map of every supported language.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageTable;

impl Serialize for LanguageTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SupportedLanguage::ALL.len()))?;
        for lang in SupportedLanguage::ALL {
            map.serialize_entry(lang.name(), lang.code())?;
        }
        map.end()
    }
}
