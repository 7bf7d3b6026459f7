//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject malformed route patterns
//! - Reject the same pattern string declared twice
//! - Warn about routes that can never be selected
//! - Check the origin is an absolute URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Equal-shape routes are legal (first declared wins), so they only warn
//! - Runs before routes are registered with a router

use thiserror::Error;
use url::Url;

use crate::config::schema::RouterConfig;
use crate::routing::{PatternError, RoutePattern, Segment};

/// A semantic problem in a router configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: PatternError,
    },

    #[error("route '{0}' is declared more than once")]
    DuplicatePattern(String),

    #[error("origin '{0}' is not an absolute URL")]
    InvalidOrigin(String),
}

/// True when `a` and `b` accept exactly the same paths with the same shape.
fn same_shape(a: &RoutePattern, b: &RoutePattern) -> bool {
    a.len() == b.len()
        && a.segments()
            .iter()
            .zip(b.segments())
            .all(|pair| match pair {
                (Segment::Literal(x), Segment::Literal(y)) => x == y,
                (Segment::Param(_), Segment::Param(_)) => true,
                _ => false,
            })
}

/// A route that is never selected because an earlier one has the same shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shadowed {
    pub pattern: String,
    pub shadowed_by: String,
}

/// Routes hidden behind an earlier route of identical shape, such as
/// `/about/` after `/about` or `/{x}/{y}` after `/{a}/{b}`.
///
/// Exact duplicates and malformed patterns are not reported here.
pub fn shadowed_routes(config: &RouterConfig) -> Vec<Shadowed> {
    let mut accepted: Vec<RoutePattern> = Vec::new();
    let mut shadowed = Vec::new();

    for route in &config.routes {
        let Ok(pattern) = RoutePattern::parse(&route.pattern) else {
            continue;
        };
        match accepted.iter().find(|p| same_shape(p, &pattern)) {
            Some(earlier) if earlier.as_str() != pattern.as_str() => shadowed.push(Shadowed {
                pattern: route.pattern.clone(),
                shadowed_by: earlier.as_str().to_string(),
            }),
            Some(_) => {}
            None => accepted.push(pattern),
        }
    }
    shadowed
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if Url::parse(&config.origin).is_err() {
        errors.push(ValidationError::InvalidOrigin(config.origin.clone()));
    }

    let mut seen: Vec<&str> = Vec::new();
    for route in &config.routes {
        if let Err(source) = RoutePattern::parse(&route.pattern) {
            errors.push(ValidationError::InvalidPattern {
                pattern: route.pattern.clone(),
                source,
            });
            continue;
        }

        if seen.contains(&route.pattern.as_str()) {
            errors.push(ValidationError::DuplicatePattern(route.pattern.clone()));
            continue;
        }
        seen.push(&route.pattern);
    }

    for hidden in shadowed_routes(config) {
        tracing::warn!(
            route = %hidden.pattern,
            shadowed_by = %hidden.shadowed_by,
            "Route can never be selected"
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
