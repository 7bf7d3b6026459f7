//! Route pattern parsing.
//!
//! # Responsibilities
//! - Normalize the registered pattern string
//! - Classify each segment as literal or `{name}` parameter
//! - Reject malformed delimiter usage at registration time
//!
//! # Design Decisions
//! - Segment count is fixed once parsed
//! - The registered string is kept for identification in match results
//! - Duplicate parameter names are accepted; the later binding wins

use std::fmt;

use crate::routing::error::PatternError;
use crate::routing::normalize::normalize;

/// One segment of a registered pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the path segment exactly.
    Literal(String),
    /// Matches any single path segment and binds it to this name.
    Param(String),
}

impl Segment {
    fn parse(raw: &str) -> Result<Self, PatternError> {
        if !raw.contains(['{', '}']) {
            return Ok(Segment::Literal(raw.to_string()));
        }

        let name = raw
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .ok_or_else(|| PatternError::MisplacedDelimiter(raw.to_string()))?;

        if name.contains(['{', '}']) {
            return Err(PatternError::MisplacedDelimiter(raw.to_string()));
        }
        if name.is_empty() {
            return Err(PatternError::EmptyName(raw.to_string()));
        }
        if !is_identifier(name) {
            return Err(PatternError::InvalidName(name.to_string()));
        }

        Ok(Segment::Param(name.to_string()))
    }

    pub fn is_param(&self) -> bool {
        matches!(self, Segment::Param(_))
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A parsed route pattern such as `/home/{homeId}/image`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern string.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let segments = normalize(raw)
            .into_iter()
            .map(Segment::parse)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The pattern string as it was registered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True for the root pattern.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of `{name}` segments.
    pub fn param_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_param()).count()
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literals_and_params() {
        let pattern = RoutePattern::parse("/home/{homeId}/image/{imageSize}/jpg").unwrap();
        assert_eq!(
            pattern.segments(),
            &[
                Segment::Literal("home".into()),
                Segment::Param("homeId".into()),
                Segment::Literal("image".into()),
                Segment::Param("imageSize".into()),
                Segment::Literal("jpg".into()),
            ]
        );
        assert_eq!(pattern.param_count(), 2);
        assert_eq!(pattern.as_str(), "/home/{homeId}/image/{imageSize}/jpg");
    }

    #[test]
    fn test_parse_root() {
        let pattern = RoutePattern::parse("/").unwrap();
        assert!(pattern.is_empty());
        assert_eq!(pattern.to_string(), "/");
    }

    #[test]
    fn test_trailing_slash_pattern_same_shape() {
        let a = RoutePattern::parse("/about/").unwrap();
        let b = RoutePattern::parse("/about").unwrap();
        assert_eq!(a.segments(), b.segments());
        assert_ne!(a.as_str(), b.as_str());
    }

    #[test]
    fn test_literal_keeps_punctuation() {
        let pattern = RoutePattern::parse("/v1.2/@me").unwrap();
        assert_eq!(
            pattern.segments(),
            &[Segment::Literal("v1.2".into()), Segment::Literal("@me".into())]
        );
    }

    #[test]
    fn test_duplicate_names_accepted() {
        let pattern = RoutePattern::parse("/{id}/{id}").unwrap();
        assert_eq!(pattern.param_count(), 2);
    }

    #[test]
    fn test_malformed_patterns() {
        assert_eq!(
            RoutePattern::parse("/home/{homeId").unwrap_err(),
            PatternError::MisplacedDelimiter("{homeId".into())
        );
        assert_eq!(
            RoutePattern::parse("/home/homeId}").unwrap_err(),
            PatternError::MisplacedDelimiter("homeId}".into())
        );
        assert_eq!(
            RoutePattern::parse("/home/id-{x}").unwrap_err(),
            PatternError::MisplacedDelimiter("id-{x}".into())
        );
        assert_eq!(
            RoutePattern::parse("/home/{{x}}").unwrap_err(),
            PatternError::MisplacedDelimiter("{{x}}".into())
        );
        assert_eq!(
            RoutePattern::parse("/home/{}").unwrap_err(),
            PatternError::EmptyName("{}".into())
        );
        assert_eq!(
            RoutePattern::parse("/home/{9lives}").unwrap_err(),
            PatternError::InvalidName("9lives".into())
        );
        assert_eq!(
            RoutePattern::parse("/home/{a b}").unwrap_err(),
            PatternError::InvalidName("a b".into())
        );
    }
}
