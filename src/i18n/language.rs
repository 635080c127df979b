//! Language type: validated language representation.
//!
//! A `Language` can only be obtained from the registry (or the constants
//! below), so every value in the program names a supported, enabled language.

use crate::i18n::{LanguageConfig, LanguageRegistry, LanguageStrings};
use anyhow::{bail, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "es", "en")
    code: &'static str,
}

impl Language {
    pub const SPANISH: Language = Language { code: "es" };

    pub const ENGLISH: Language = Language { code: "en" };

    pub const FRENCH: Language = Language { code: "fr" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Lenient variant of [`Language::from_code`] for path parsing, where an
    /// unsupported code is an expected outcome rather than an error.
    pub fn parse(code: &str) -> Option<Language> {
        Self::from_code(code).ok()
    }

    /// The language served when nothing else selects one.
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// Best supported language from an `Accept-Language` header.
    ///
    /// Entries are ranked by q-value; a regional tag matches its base
    /// language (`en-GB` → `en`). Returns `None` when nothing is supported.
    pub fn from_accept_language(header: &str) -> Option<Language> {
        let mut entries: Vec<(&str, f64)> = header
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                let mut segments = part.split(';');
                let tag = segments.next().unwrap_or_default().trim();
                let q = segments
                    .filter_map(|s| s.trim().strip_prefix("q="))
                    .find_map(|v| v.parse::<f64>().ok())
                    .unwrap_or(1.0);
                (tag, q)
            })
            .filter(|(_, q)| *q > 0.0)
            .collect();

        // Stable sort keeps header order among equal q-values.
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        entries.into_iter().find_map(|(tag, _)| {
            let base = tag.split('-').next().unwrap_or(tag).to_ascii_lowercase();
            Self::parse(&base)
        })
    }

    /// All enabled languages in enumeration order.
    pub fn all() -> Vec<Language> {
        LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This cannot
    /// happen for a `Language` built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// UI strings for this language.
    pub fn strings(&self) -> &'static LanguageStrings {
        self.config().strings
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_spanish_constant() {
        let spanish = Language::SPANISH;
        assert_eq!(spanish.code(), "es");
        assert_eq!(spanish.name(), "Spanish");
        assert!(spanish.is_default());
    }

    #[test]
    fn test_french_constant() {
        let french = Language::FRENCH;
        assert_eq!(french.code(), "fr");
        assert_eq!(french.native_name(), "Français");
        assert!(!french.is_default());
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_english() {
        let language = Language::from_code("en").expect("Should succeed");
        assert_eq!(language, Language::ENGLISH);
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("de");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert!(Language::from_code("EN").is_err());
    }

    #[test]
    fn test_parse_returns_none_for_unsupported() {
        assert_eq!(Language::parse("fr"), Some(Language::FRENCH));
        assert_eq!(Language::parse("assets"), None);
        assert_eq!(Language::parse(""), None);
    }

    // ==================== Accept-Language Tests ====================

    #[test]
    fn test_accept_language_first_supported() {
        assert_eq!(
            Language::from_accept_language("fr,en;q=0.5"),
            Some(Language::FRENCH)
        );
    }

    #[test]
    fn test_accept_language_q_value_priority() {
        assert_eq!(
            Language::from_accept_language("es;q=0.4,en;q=0.9"),
            Some(Language::ENGLISH)
        );
    }

    #[test]
    fn test_accept_language_region_prefix() {
        assert_eq!(
            Language::from_accept_language("en-GB,de;q=0.8"),
            Some(Language::ENGLISH)
        );
        assert_eq!(
            Language::from_accept_language("FR-ca"),
            Some(Language::FRENCH)
        );
    }

    #[test]
    fn test_accept_language_skips_unsupported_and_zero_q() {
        assert_eq!(
            Language::from_accept_language("de,pt;q=0.9,es;q=0.1"),
            Some(Language::SPANISH)
        );
        assert_eq!(Language::from_accept_language("en;q=0"), None);
        assert_eq!(Language::from_accept_language("de, *"), None);
        assert_eq!(Language::from_accept_language(""), None);
    }

    // ==================== Enumeration Tests ====================

    #[test]
    fn test_all_in_registry_order() {
        assert_eq!(
            Language::all(),
            vec![Language::SPANISH, Language::ENGLISH, Language::FRENCH]
        );
    }

    #[test]
    fn test_default_language() {
        assert_eq!(Language::default_language(), Language::SPANISH);
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::ENGLISH.to_string(), "en");
    }

    #[test]
    fn test_serialize_as_code() {
        let json = serde_json::to_string(&Language::FRENCH).unwrap();
        assert_eq!(json, "\"fr\"");
    }

    #[test]
    fn test_strings_access() {
        assert_eq!(Language::SPANISH.strings().nav_home, "Inicio");
    }
}
