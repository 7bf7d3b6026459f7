//! Route matching logic.
//!
//! # Responsibilities
//! - Filter candidates by segment count
//! - Compare literal segments exactly (case-sensitive)
//! - Bind parameter segments verbatim
//! - Pick the most specific full match
//!
//! # Design Decisions
//! - No prefix or wildcard matching: lengths must be equal
//! - Specificity: at the first position where shapes differ, literal beats parameter
//! - Identical shapes fall back to registration order (first wins)
//! - Matching is total; "no route" is `None`, not an error

use std::cmp::Ordering;

use crate::routing::context::{Handler, Params};
use crate::routing::pattern::{RoutePattern, Segment};
use crate::routing::table::RouteEntry;

/// Something that can accept or reject a single path segment.
pub trait Matcher: std::fmt::Debug {
    /// Returns true if `segment` satisfies this matcher.
    fn matches(&self, segment: &str) -> bool;
}

impl Matcher for Segment {
    fn matches(&self, segment: &str) -> bool {
        match self {
            Segment::Literal(text) => text == segment,
            Segment::Param(_) => true,
        }
    }
}

/// The winning entry for a path and the parameters bound by it.
#[derive(Debug, Clone)]
pub struct RouteMatch<'t> {
    entry: &'t RouteEntry,
    params: Params,
}

impl<'t> RouteMatch<'t> {
    /// The matched pattern.
    pub fn pattern(&self) -> &'t RoutePattern {
        self.entry.pattern()
    }

    pub fn handler(&self) -> &'t Handler {
        self.entry.handler()
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn into_params(self) -> Params {
        self.params
    }
}

/// Whether `pattern` accepts every segment of `path`.
fn accepts(pattern: &RoutePattern, path: &[&str]) -> bool {
    pattern.len() == path.len()
        && pattern
            .segments()
            .iter()
            .zip(path)
            .all(|(spec, segment)| spec.matches(segment))
}

/// Bind the parameters of a pattern already known to accept `path`.
fn bind(pattern: &RoutePattern, path: &[&str]) -> Params {
    let mut params = Params::new();
    for (spec, segment) in pattern.segments().iter().zip(path) {
        if let Segment::Param(name) = spec {
            params.insert(name.as_str(), *segment);
        }
    }
    params
}

/// Order two equal-length patterns by specificity.
///
/// `Greater` means `a` is more specific than `b`.
pub fn compare_specificity(a: &RoutePattern, b: &RoutePattern) -> Ordering {
    a.segments()
        .iter()
        .zip(b.segments())
        .find_map(|(x, y)| match (x.is_param(), y.is_param()) {
            (false, true) => Some(Ordering::Greater),
            (true, false) => Some(Ordering::Less),
            _ => None,
        })
        .unwrap_or(Ordering::Equal)
}

/// Find the best entry for a normalized path.
pub fn find_match<'t>(path: &[&str], entries: &'t [RouteEntry]) -> Option<RouteMatch<'t>> {
    let mut best: Option<&'t RouteEntry> = None;

    for entry in entries.iter().filter(|e| accepts(e.pattern(), path)) {
        // Replace only on strictly higher specificity so earlier entries keep ties.
        let better = match best {
            None => true,
            Some(current) => {
                compare_specificity(entry.pattern(), current.pattern()) == Ordering::Greater
            }
        };
        if better {
            best = Some(entry);
        }
    }

    best.map(|entry| RouteMatch {
        entry,
        params: bind(entry.pattern(), path),
    })
}
