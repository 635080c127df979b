use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language-independent identifier of a page.
///
/// Variant order is the enumeration order used by inverse lookup: when two
/// keys share a segment, the earlier one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKey {
    Home,
    About,
    Services,
    Pricing,
    Booking,
    Contact,
    Privacy,
    Terms,
    Cookies,
    LegalNotice,
}

impl RouteKey {
    /// Every route key in enumeration order.
    pub const ALL: [RouteKey; 10] = [
        RouteKey::Home,
        RouteKey::About,
        RouteKey::Services,
        RouteKey::Pricing,
        RouteKey::Booking,
        RouteKey::Contact,
        RouteKey::Privacy,
        RouteKey::Terms,
        RouteKey::Cookies,
        RouteKey::LegalNotice,
    ];

    /// Raw key string. Also the degraded-mode path when a translation is missing.
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteKey::Home => "home",
            RouteKey::About => "about",
            RouteKey::Services => "services",
            RouteKey::Pricing => "pricing",
            RouteKey::Booking => "booking",
            RouteKey::Contact => "contact",
            RouteKey::Privacy => "privacy",
            RouteKey::Terms => "terms",
            RouteKey::Cookies => "cookies",
            RouteKey::LegalNotice => "legal_notice",
        }
    }

    /// Whether this key is the site root, the only key allowed an empty segment.
    pub fn is_home(&self) -> bool {
        matches!(self, RouteKey::Home)
    }

    /// Pages listed in the main navigation, in menu order.
    pub fn main_navigation() -> [RouteKey; 6] {
        [
            RouteKey::Home,
            RouteKey::About,
            RouteKey::Services,
            RouteKey::Pricing,
            RouteKey::Booking,
            RouteKey::Contact,
        ]
    }

    /// Legal pages linked from the footer.
    pub fn legal_pages() -> [RouteKey; 4] {
        [
            RouteKey::Privacy,
            RouteKey::Terms,
            RouteKey::Cookies,
            RouteKey::LegalNotice,
        ]
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route key: '{0}'")]
pub struct UnknownRouteKey(pub String);

impl FromStr for RouteKey {
    type Err = UnknownRouteKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownRouteKey(s.to_string()))
    }
}
