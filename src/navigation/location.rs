//! Displayed-location formatting.

use serde::{Deserialize, Serialize};

/// How a route path is shown in the host's location bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlMode {
    /// The location is the path itself (history API).
    #[default]
    History,
    /// The location is `#` followed by the path, for hosts without a history API.
    Hash,
}

impl UrlMode {
    /// Format `path` as a displayed location.
    pub fn to_location(self, path: &str) -> String {
        match self {
            UrlMode::History => path.to_string(),
            UrlMode::Hash => format!("#{}", path),
        }
    }

    /// Recover the route path from a displayed location.
    pub fn to_path(self, location: &str) -> String {
        match self {
            UrlMode::History => location.to_string(),
            UrlMode::Hash => location.strip_prefix('#').unwrap_or(location).to_string(),
        }
    }
}
