//! Internationalization: two locales, dot-keyed string catalogs and the
//! text direction each locale implies.
//!
//! Catalogs are embedded JSON files (`locales/*.json`) flattened into
//! `a.b.c` keys on first use. Lookups fall back to Arabic and then to the
//! key itself, so a missing string is visible but never fatal.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CardError;

const AR_CATALOG: &str = include_str!("../locales/ar.json");
const EN_CATALOG: &str = include_str!("../locales/en.json");

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    En,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::Ar, Language::En]
    }

    /// ISO code stored in preferences and set on the document root.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    /// Name of the language in itself, for the language picker.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Ar => "العربية",
            Language::En => "English",
        }
    }

    /// Arabic is right-to-left; everything else is left-to-right.
    pub fn direction(&self) -> Direction {
        match self {
            Language::Ar => Direction::Rtl,
            Language::En => Direction::Ltr,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar" => Ok(Language::Ar),
            "en" => Ok(Language::En),
            other => Err(CardError::validation("language", format!("unsupported language '{other}'"))),
        }
    }
}

/// Text direction of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ltr" => Ok(Direction::Ltr),
            "rtl" => Ok(Direction::Rtl),
            other => Err(CardError::validation("direction", format!("unknown direction '{other}'"))),
        }
    }
}

type Catalog = HashMap<String, String>;

fn catalog(language: Language) -> &'static Catalog {
    static AR: OnceLock<Catalog> = OnceLock::new();
    static EN: OnceLock<Catalog> = OnceLock::new();

    match language {
        Language::Ar => AR.get_or_init(|| parse_catalog(AR_CATALOG, language)),
        Language::En => EN.get_or_init(|| parse_catalog(EN_CATALOG, language)),
    }
}

fn parse_catalog(source: &str, language: Language) -> Catalog {
    let mut out = Catalog::new();
    match serde_json::from_str::<Value>(source) {
        Ok(root) => flatten("", &root, &mut out),
        Err(e) => tracing::error!(%language, "Failed to parse locale catalog: {}", e),
    }
    out
}

fn flatten(prefix: &str, value: &Value, out: &mut Catalog) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten(&key, v, out);
            }
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}

/// Resolves UI strings for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Translator {
    language: Language,
}

impl Translator {
    /// Language used when a key is missing from the active catalog.
    pub const FALLBACK: Language = Language::Ar;

    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    /// Whether the active catalog (not the fallback) has the key.
    pub fn has(&self, key: &str) -> bool {
        catalog(self.language).contains_key(key)
    }

    /// Translate a key.
    pub fn t(&self, key: &str) -> String {
        catalog(self.language)
            .get(key)
            .or_else(|| catalog(Self::FALLBACK).get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Translate a key and substitute `{{name}}` placeholders.
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.t(key);
        for (name, value) in args {
            text = text.replace(&format!("{{{{{name}}}}}"), value);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_per_language() {
        assert_eq!(Language::Ar.direction(), Direction::Rtl);
        assert_eq!(Language::En.direction(), Direction::Ltr);
    }

    #[test]
    fn test_language_parse() {
        assert_eq!("AR".parse::<Language>().unwrap(), Language::Ar);
        assert_eq!(" en ".parse::<Language>().unwrap(), Language::En);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_catalogs_share_keys() {
        let ar = catalog(Language::Ar);
        let en = catalog(Language::En);
        assert!(!ar.is_empty());
        let missing: Vec<_> = ar.keys().filter(|k| !en.contains_key(*k)).collect();
        assert!(missing.is_empty(), "keys missing from en: {:?}", missing);
        let missing: Vec<_> = en.keys().filter(|k| !ar.contains_key(*k)).collect();
        assert!(missing.is_empty(), "keys missing from ar: {:?}", missing);
    }

    #[test]
    fn test_translate_and_fallback() {
        let en = Translator::new(Language::En);
        assert_eq!(en.t("common.save"), "Save");
        assert_eq!(en.t("no.such.key"), "no.such.key");

        let ar = Translator::new(Language::Ar);
        assert_ne!(ar.t("common.save"), "common.save");
    }

    #[test]
    fn test_interpolation() {
        let en = Translator::new(Language::En);
        let text = en.t_with("createCard.stepOf", &[("current", "2"), ("total", "5")]);
        assert_eq!(text, "Step 2 of 5");
    }
}
