//! Localized routing.
//!
//! - `key`: the closed set of logical pages
//! - `table`: per-language URL segments for each page
//! - `resolver`: forward/inverse lookup and language switching

mod key;
mod resolver;
mod table;

pub use key::{RouteKey, UnknownRouteKey};
pub use resolver::{ParsedPath, Resolver};
pub use table::{RouteTable, RouteTableError, SegmentCollision};
