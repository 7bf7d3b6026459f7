//! Configuration schema definitions.
//!
//! This module defines the route manifest read by the CLI and by hosts
//! that prefer declaring routes in a file. All types derive Serde traits.

use serde::{Deserialize, Serialize};

use crate::navigation::UrlMode;

/// Root configuration for a router.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// How paths are shown in the location bar.
    pub mode: UrlMode,

    /// Origin the app is served from; links elsewhere are not intercepted.
    pub origin: String,

    /// Route in-app link clicks instead of loading a new page.
    pub intercept_links: bool,

    /// Route definitions, in registration order.
    pub routes: Vec<RouteConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            mode: UrlMode::History,
            origin: "http://localhost".to_string(),
            intercept_links: true,
            routes: Vec::new(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// One declared route.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Pattern string, e.g. `/home/{homeId}`.
    pub pattern: String,

    /// Label used in output; defaults to the pattern.
    #[serde(default)]
    pub name: Option<String>,
}

impl RouteConfig {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            name: None,
        }
    }

    /// The name if set, otherwise the pattern.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.pattern)
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RouterConfig::default();
        assert_eq!(config.mode, UrlMode::History);
        assert!(config.intercept_links);
        assert!(config.routes.is_empty());
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_minimal_manifest() {
        let config: RouterConfig = toml::from_str(
            r#"
            mode = "hash"

            [[routes]]
            pattern = "/"

            [[routes]]
            pattern = "/home/{homeId}"
            name = "home"
            "#,
        )
        .unwrap();

        assert_eq!(config.mode, UrlMode::Hash);
        assert_eq!(config.origin, "http://localhost");
        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.routes[0].label(), "/");
        assert_eq!(config.routes[1].label(), "home");
    }
}
