pub mod booking;
pub mod config;
pub mod error;
pub mod i18n;
pub mod pages;
pub mod routing;
pub mod security;
pub mod server;
pub mod util;
