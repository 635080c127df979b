//! Internationalization (i18n) module.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported languages and their metadata
//! - `language`: Type-safe Language type validated against the registry
//! - `strings`: Per-language UI string catalogs, complete by construction
//! - `validator`: Load-time route table validation
//! - `metrics`: Counters for degraded routing lookups
//!
//! # Example
//!
//! ```rust,ignore
//! use coach_site::i18n::Language;
//!
//! let french = Language::from_code("fr")?;
//! let title = french.strings().title_booking;
//! ```

mod language;
mod metrics;
mod registry;
mod strings;
mod validator;

pub use language::Language;
pub use metrics::{MetricsReport, RoutingMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::LanguageStrings;
pub use validator::{RouteTableValidator, ValidationReport};
