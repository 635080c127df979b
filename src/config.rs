use crate::booking::SchedulingWidget;
use anyhow::{bail, Result};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,
    /// Public base URL without trailing slash, used for canonical and sitemap links
    pub site_url: String,

    // Routing
    /// Optional JSON route table replacing the built-in one
    pub routes_file: Option<String>,

    // Booking
    pub widget: SchedulingWidget,
    pub widget_ready_timeout: Duration,
    pub processing_delay: Duration,

    // Security
    /// When set, required as `x-api-key` on the metrics endpoint
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            site_url: "http://localhost:8080".to_string(),
            routes_file: None,
            widget: SchedulingWidget::default(),
            widget_ready_timeout: Duration::from_secs(10),
            processing_delay: Duration::from_millis(500),
            api_key: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let site_url = std::env::var("SITE_URL")
            .unwrap_or(defaults.site_url)
            .trim_end_matches('/')
            .to_string();
        if !site_url.starts_with("http://") && !site_url.starts_with("https://") {
            bail!("SITE_URL must start with http:// or https://, got '{}'", site_url);
        }

        Ok(Self {
            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            site_url,

            // Routing
            routes_file: std::env::var("ROUTES_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty()),

            // Booking
            widget: SchedulingWidget {
                url: std::env::var("SCHEDULING_WIDGET_URL").unwrap_or(defaults.widget.url),
                ready_event: std::env::var("WIDGET_READY_EVENT")
                    .unwrap_or(defaults.widget.ready_event),
                origin: std::env::var("WIDGET_ORIGIN").unwrap_or(defaults.widget.origin),
            },
            widget_ready_timeout: std::env::var("WIDGET_READY_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.widget_ready_timeout),
            processing_delay: std::env::var("BOOKING_PROCESSING_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.processing_delay),

            // Security
            api_key: std::env::var("API_KEY")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        })
    }
}
