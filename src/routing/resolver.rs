//! Bidirectional mapping between route keys and localized URL paths.
//!
//! Every lookup is total: a gap in the table yields the raw route key as the
//! path and a logged warning, an unrecognized pathname yields `None` or the
//! bare language root. Nothing here returns an error once the resolver exists.

use crate::i18n::{Language, RouteTableValidator, RoutingMetrics};
use crate::routing::{RouteKey, RouteTable, RouteTableError};
use serde::Serialize;
use tracing::{debug, warn};

/// Result of inverse lookup on a localized pathname.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParsedPath {
    pub language: Language,
    /// `None` when the language prefix is valid but no route matches the rest
    pub route_key: Option<RouteKey>,
}

/// Route resolver over an explicitly supplied table.
#[derive(Debug)]
pub struct Resolver {
    table: RouteTable,
    metrics: RoutingMetrics,
}

impl Resolver {
    /// Build a resolver, rejecting tables where inverse lookup would be ambiguous.
    ///
    /// Coverage gaps are logged and tolerated: the affected routes resolve in
    /// degraded mode (raw key as path).
    pub fn new(table: RouteTable) -> Result<Self, RouteTableError> {
        if let Some(collision) = table.collisions().into_iter().next() {
            return Err(RouteTableError::DuplicateSegment(collision));
        }
        Ok(Self::lenient(table))
    }

    /// Build a resolver without rejecting duplicate segments.
    ///
    /// Collisions are logged; inverse lookup then returns the first matching
    /// key in enumeration order.
    pub fn lenient(table: RouteTable) -> Self {
        let report = RouteTableValidator::validate(&table);
        for error in &report.errors {
            warn!("Route table: {}", error);
        }
        for warning in &report.warnings {
            warn!("Route table: {}", warning);
        }

        Self {
            table,
            metrics: RoutingMetrics::new(),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn metrics(&self) -> &RoutingMetrics {
        &self.metrics
    }

    /// Usable table segment: present, and non-empty unless the key is home.
    fn localized_segment(&self, key: RouteKey, language: Language) -> Option<&str> {
        self.table
            .segment(key, language)
            .filter(|segment| key.is_home() || !segment.is_empty())
    }

    /// Path for `key` in `language` without a leading slash.
    ///
    /// Falls back to the raw key string when the table has no usable entry.
    pub fn resolve_path(&self, key: RouteKey, language: Language) -> String {
        match self.localized_segment(key, language) {
            Some(segment) => segment.to_string(),
            None => {
                warn!(
                    "No '{}' translation for route '{}', using raw key as path",
                    language, key
                );
                self.metrics.record_fallback();
                key.as_str().to_string()
            }
        }
    }

    /// Full route `/{language}[/{path}]`; home resolves to exactly `/{language}`.
    pub fn resolve_route(&self, key: RouteKey, language: Language) -> String {
        let path = self.resolve_path(key, language);
        join_route(language, &path)
    }

    /// Recover language and route key from a pathname.
    ///
    /// Query strings, fragments and empty segments are ignored, so `/en/`
    /// and `/en/booking/?plan=x` parse like `/en` and `/en/booking`. Returns
    /// `None` when the first segment is not a supported language.
    pub fn parse_path(&self, pathname: &str) -> Option<ParsedPath> {
        let path = pathname.split(['?', '#']).next().unwrap_or_default();
        let mut segments = path.split('/').filter(|segment| !segment.is_empty());

        let Some(language) = segments.next().and_then(Language::parse) else {
            debug!("Path '{}' has no language prefix", pathname);
            self.metrics.record_unlocalized_path();
            return None;
        };

        let rest = segments.collect::<Vec<_>>().join("/");

        // Same value resolve_path would produce, without logging each miss.
        let route_key = RouteKey::ALL
            .into_iter()
            .find(|&key| self.table.effective_segment(key, language) == rest);

        if route_key.is_none() {
            debug!("Path '{}' matches no route in '{}'", pathname, language);
            self.metrics.record_unmatched_path();
        }

        Some(ParsedPath {
            language,
            route_key,
        })
    }

    /// `resolve_route(key, lang)` for every supported language, in registry order.
    pub fn all_language_variants(&self, key: RouteKey) -> Vec<String> {
        self.alternates(key)
            .into_iter()
            .map(|(_, route)| route)
            .collect()
    }

    /// Like [`Resolver::all_language_variants`], paired with the language.
    pub fn alternates(&self, key: RouteKey) -> Vec<(Language, String)> {
        Language::all()
            .into_iter()
            .map(|language| (language, self.resolve_route(key, language)))
            .collect()
    }

    /// Equivalent of `pathname` in `target`, or the target's home when the
    /// current page is not recognized.
    pub fn switch_language(&self, pathname: &str, target: Language) -> String {
        self.metrics.record_language_switch();

        match self.parse_path(pathname) {
            Some(ParsedPath {
                route_key: Some(key),
                ..
            }) => self.resolve_route(key, target),
            _ => join_route(target, ""),
        }
    }
}

fn join_route(language: Language, path: &str) -> String {
    if path.is_empty() {
        format!("/{}", language)
    } else {
        format!("/{}/{}", language, path)
    }
}
