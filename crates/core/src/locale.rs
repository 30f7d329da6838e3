//! Bilingual (English/Arabic) message payloads.
//!
//! Client-facing validation and auth errors carry both languages so the
//! public site and the admin UI can render whichever the visitor reads.
//! Internal errors stay English-only.

use std::fmt;

use serde::Serialize;

/// A message in both supported languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Localized {
    pub en: String,
    pub ar: String,
}

impl Localized {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    /// English-only message; the Arabic side repeats the English text.
    ///
    /// For internal messages that are never shown to public visitors.
    pub fn en_only(en: impl Into<String>) -> Self {
        let en = en.into();
        Self {
            ar: en.clone(),
            en,
        }
    }
}

impl fmt::Display for Localized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.en)
    }
}

/// "`field` is required" in both languages.
pub fn required(field_en: &str, field_ar: &str) -> Localized {
    Localized::new(
        format!("{field_en} is required"),
        format!("حقل {field_ar} مطلوب"),
    )
}

/// "`field` is invalid" in both languages.
pub fn invalid(field_en: &str, field_ar: &str) -> Localized {
    Localized::new(
        format!("{field_en} is invalid"),
        format!("قيمة {field_ar} غير صالحة"),
    )
}
