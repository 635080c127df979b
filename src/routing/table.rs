//! Route translation table: `RouteKey → Language → URL segment`.

use crate::i18n::Language;
use crate::routing::RouteKey;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum RouteTableError {
    #[error("failed to read route table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid route table JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(
        "segment '{}' is shared by '{}' and '{}' in language '{}'",
        .0.segment, .0.first, .0.second, .0.language
    )]
    DuplicateSegment(SegmentCollision),
}

/// Two distinct route keys resolving to the same segment in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentCollision {
    pub language: Language,
    pub segment: String,
    /// The key that wins inverse lookup (earlier in enumeration order)
    pub first: RouteKey,
    pub second: RouteKey,
}

/// Per-language URL segments for every route key.
///
/// Segments are stored without leading or trailing slashes.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: HashMap<RouteKey, HashMap<Language, String>>,
}

impl RouteTable {
    /// An empty table. Every lookup against it degrades to the raw key.
    pub fn new() -> Self {
        Self::default()
    }

    /// The site's built-in table.
    pub fn builtin() -> Self {
        use Language as L;
        use RouteKey as K;

        let rows: [(RouteKey, [&str; 3]); 10] = [
            (K::Home, ["", "", ""]),
            (K::About, ["sobre-mi", "about", "a-propos"]),
            (K::Services, ["servicios", "services", "services"]),
            (K::Pricing, ["tarifas", "pricing", "tarifs"]),
            (K::Booking, ["reservar", "booking", "reserver"]),
            (K::Contact, ["contacto", "contact", "contact"]),
            (K::Privacy, ["privacidad", "privacy", "confidentialite"]),
            (K::Terms, ["terminos", "terms", "conditions"]),
            (K::Cookies, ["cookies", "cookies", "cookies"]),
            (K::LegalNotice, ["aviso-legal", "legal-notice", "mentions-legales"]),
        ];

        let mut table = Self::new();
        for (key, [es, en, fr]) in rows {
            table.insert(key, L::SPANISH, es);
            table.insert(key, L::ENGLISH, en);
            table.insert(key, L::FRENCH, fr);
        }
        table
    }

    /// Builder-style insert.
    pub fn with(mut self, key: RouteKey, language: Language, segment: &str) -> Self {
        self.insert(key, language, segment);
        self
    }

    /// Set the segment for `(key, language)`, stripping surrounding slashes.
    pub fn insert(&mut self, key: RouteKey, language: Language, segment: &str) {
        self.entries
            .entry(key)
            .or_default()
            .insert(language, segment.trim_matches('/').to_string());
    }

    /// Raw table entry, without any fallback.
    pub fn segment(&self, key: RouteKey, language: Language) -> Option<&str> {
        self.entries
            .get(&key)
            .and_then(|by_language| by_language.get(&language))
            .map(String::as_str)
    }

    /// Parse a table from its JSON data-file form:
    /// `{ "<route_key>": { "<lang>": "<segment>" } }`.
    ///
    /// Unknown route keys and language codes are skipped with a warning.
    pub fn from_json_str(json: &str) -> Result<Self, RouteTableError> {
        let raw: BTreeMap<String, BTreeMap<String, String>> = serde_json::from_str(json)?;
        let mut table = Self::new();

        for (raw_key, by_language) in raw {
            let key = match raw_key.parse::<RouteKey>() {
                Ok(key) => key,
                Err(e) => {
                    warn!("Skipping route table entry: {}", e);
                    continue;
                }
            };

            for (code, segment) in by_language {
                match Language::parse(&code) {
                    Some(language) => table.insert(key, language, &segment),
                    None => warn!(
                        "Skipping unsupported language '{}' for route '{}'",
                        code, key
                    ),
                }
            }
        }

        Ok(table)
    }

    /// Load a table from a JSON data file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RouteTableError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| RouteTableError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let table = Self::from_json_str(&json)?;
        info!("Loaded route table from {}", path.display());
        Ok(table)
    }

    /// Path a key resolves to: its segment, or the raw key for a gap.
    ///
    /// Empty non-home segments count as gaps, not as claims on the root.
    pub fn effective_segment(&self, key: RouteKey, language: Language) -> &str {
        self.segment(key, language)
            .filter(|segment| key.is_home() || !segment.is_empty())
            .unwrap_or_else(|| key.as_str())
    }

    /// Every pair of distinct keys resolving to the same path within a language.
    ///
    /// Gaps are compared through their raw-key fallback. Keys are compared in
    /// enumeration order, so `first` is always the key inverse lookup would pick.
    pub fn collisions(&self) -> Vec<SegmentCollision> {
        let mut collisions = Vec::new();

        for language in Language::all() {
            let mut seen: HashMap<&str, RouteKey> = HashMap::new();

            for key in RouteKey::ALL {
                let segment = self.effective_segment(key, language);

                match seen.get(segment) {
                    Some(&first) => collisions.push(SegmentCollision {
                        language,
                        segment: segment.to_string(),
                        first,
                        second: key,
                    }),
                    None => {
                        seen.insert(segment, key);
                    }
                }
            }
        }

        collisions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // ==================== Builtin Table Tests ====================

    #[test]
    fn test_builtin_booking_segments() {
        let table = RouteTable::builtin();
        assert_eq!(table.segment(RouteKey::Booking, Language::SPANISH), Some("reservar"));
        assert_eq!(table.segment(RouteKey::Booking, Language::ENGLISH), Some("booking"));
        assert_eq!(table.segment(RouteKey::Booking, Language::FRENCH), Some("reserver"));
    }

    #[test]
    fn test_builtin_home_is_empty_everywhere() {
        let table = RouteTable::builtin();
        for language in Language::all() {
            assert_eq!(table.segment(RouteKey::Home, language), Some(""));
        }
    }

    #[test]
    fn test_builtin_covers_every_key_and_language() {
        let table = RouteTable::builtin();
        for key in RouteKey::ALL {
            for language in Language::all() {
                assert!(table.segment(key, language).is_some(), "{key}/{language}");
            }
        }
    }

    #[test]
    fn test_builtin_has_no_collisions() {
        assert!(RouteTable::builtin().collisions().is_empty());
    }

    // ==================== Insert Tests ====================

    #[test]
    fn test_insert_strips_slashes() {
        let table = RouteTable::new().with(RouteKey::About, Language::ENGLISH, "/about/");
        assert_eq!(table.segment(RouteKey::About, Language::ENGLISH), Some("about"));
    }

    #[test]
    fn test_empty_table_has_no_segments() {
        let table = RouteTable::new();
        assert_eq!(table.segment(RouteKey::Home, Language::ENGLISH), None);
    }

    // ==================== Collision Tests ====================

    #[test]
    fn test_collision_reports_enumeration_order() {
        let table = RouteTable::new()
            .with(RouteKey::Terms, Language::ENGLISH, "legal")
            .with(RouteKey::Privacy, Language::ENGLISH, "legal");

        let collisions = table.collisions();
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].first, RouteKey::Privacy);
        assert_eq!(collisions[0].second, RouteKey::Terms);
        assert_eq!(collisions[0].segment, "legal");
        assert_eq!(collisions[0].language, Language::ENGLISH);
    }

    #[test]
    fn test_segment_shadowing_raw_key_fallback_is_a_collision() {
        let builtin = RouteTable::builtin();
        let mut table = RouteTable::new();
        for key in RouteKey::ALL {
            for language in Language::all() {
                if key == RouteKey::Booking && language == Language::ENGLISH {
                    continue;
                }
                table.insert(key, language, builtin.segment(key, language).unwrap());
            }
        }
        table.insert(RouteKey::Pricing, Language::ENGLISH, "booking");

        let collisions = table.collisions();
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].segment, "booking");
        assert_eq!(collisions[0].first, RouteKey::Pricing);
        assert_eq!(collisions[0].second, RouteKey::Booking);
    }

    #[test]
    fn test_empty_segment_collides_through_raw_key() {
        let table = RouteTable::builtin()
            .with(RouteKey::Cookies, Language::FRENCH, "")
            .with(RouteKey::Privacy, Language::FRENCH, "cookies");

        let collisions = table.collisions();
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].first, RouteKey::Privacy);
        assert_eq!(collisions[0].second, RouteKey::Cookies);
    }

    #[test]
    fn test_effective_segment() {
        let table = RouteTable::new()
            .with(RouteKey::Home, Language::ENGLISH, "")
            .with(RouteKey::Terms, Language::ENGLISH, "");
        assert_eq!(table.effective_segment(RouteKey::Home, Language::ENGLISH), "");
        assert_eq!(table.effective_segment(RouteKey::Terms, Language::ENGLISH), "terms");
        assert_eq!(table.effective_segment(RouteKey::About, Language::ENGLISH), "about");
    }

    #[test]
    fn test_same_segment_across_languages_is_not_a_collision() {
        let table = RouteTable::new()
            .with(RouteKey::Contact, Language::ENGLISH, "contact")
            .with(RouteKey::Contact, Language::FRENCH, "contact");
        assert!(table.collisions().is_empty());
    }

    #[test]
    fn test_duplicate_segment_error_message() {
        let table = RouteTable::new()
            .with(RouteKey::About, Language::FRENCH, "x")
            .with(RouteKey::Contact, Language::FRENCH, "x");
        let err = RouteTableError::DuplicateSegment(table.collisions().remove(0));
        assert_eq!(
            err.to_string(),
            "segment 'x' is shared by 'about' and 'contact' in language 'fr'"
        );
    }

    // ==================== JSON Loading Tests ====================

    #[test]
    fn test_from_json_str() {
        let table = RouteTable::from_json_str(
            r#"{"booking": {"es": "reservar", "en": "booking", "fr": "reserver"}}"#,
        )
        .expect("valid table");

        assert_eq!(table.segment(RouteKey::Booking, Language::FRENCH), Some("reserver"));
        assert_eq!(table.segment(RouteKey::About, Language::FRENCH), None);
    }

    #[test]
    fn test_from_json_skips_unknown_keys_and_languages() {
        let table = RouteTable::from_json_str(
            r#"{"blog": {"en": "blog"}, "about": {"de": "ueber", "en": "about"}}"#,
        )
        .expect("unknown entries are skipped, not fatal");

        assert_eq!(table.segment(RouteKey::About, Language::ENGLISH), Some("about"));
        assert!(RouteKey::ALL
            .iter()
            .all(|&key| table.segment(key, Language::SPANISH).is_none()));
    }

    #[test]
    fn test_from_json_invalid() {
        let result = RouteTable::from_json_str("{not json");
        assert!(matches!(result, Err(RouteTableError::Json(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"pricing": {{"en": "prices"}}}}"#).unwrap();

        let table = RouteTable::load(file.path()).expect("should load");
        assert_eq!(table.segment(RouteKey::Pricing, Language::ENGLISH), Some("prices"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = RouteTable::load("/nonexistent/routes.json");
        match result {
            Err(RouteTableError::Io { path, .. }) => assert!(path.contains("routes.json")),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
