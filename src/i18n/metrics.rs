//! Routing metrics.
//!
//! Counters for the degraded paths of the resolver. Each resolver owns its
//! own instance so two resolvers (e.g. in tests) never share counts.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct RoutingMetrics {
    /// Lookups answered with the raw route key because the table had no usable segment
    fallback_resolutions: AtomicUsize,

    /// Pathnames whose first segment was not a supported language
    unlocalized_paths: AtomicUsize,

    /// Localized pathnames that matched no route key
    unmatched_paths: AtomicUsize,

    /// Language switches computed
    language_switches: AtomicUsize,
}

impl RoutingMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_fallback(&self) {
        self.fallback_resolutions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_unlocalized_path(&self) {
        self.unlocalized_paths.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_unmatched_path(&self) {
        self.unmatched_paths.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_language_switch(&self) {
        self.language_switches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn fallback_resolutions(&self) -> usize {
        self.fallback_resolutions.load(Ordering::Relaxed)
    }

    pub fn unlocalized_paths(&self) -> usize {
        self.unlocalized_paths.load(Ordering::Relaxed)
    }

    pub fn unmatched_paths(&self) -> usize {
        self.unmatched_paths.load(Ordering::Relaxed)
    }

    pub fn language_switches(&self) -> usize {
        self.language_switches.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        MetricsReport {
            fallback_resolutions: self.fallback_resolutions(),
            unlocalized_paths: self.unlocalized_paths(),
            unmatched_paths: self.unmatched_paths(),
            language_switches: self.language_switches(),
        }
    }
}

/// Snapshot of the routing counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsReport {
    pub fallback_resolutions: usize,
    pub unlocalized_paths: usize,
    pub unmatched_paths: usize,
    pub language_switches: usize,
}
