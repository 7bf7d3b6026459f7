//! Route table storage.
//!
//! # Responsibilities
//! - Keep route entries in registration order
//! - Hold the optional not-found handler
//! - Expose matching over the stored entries
//!
//! # Design Decisions
//! - Append-only: entries are never removed or reordered
//! - Cheap to clone (handlers are `Arc`), so the router can swap
//!   whole tables instead of locking during dispatch

use crate::routing::context::Handler;
use crate::routing::matcher::{find_match, RouteMatch};
use crate::routing::pattern::RoutePattern;

/// A registered pattern and its handler.
#[derive(Clone)]
pub struct RouteEntry {
    pattern: RoutePattern,
    handler: Handler,
}

impl RouteEntry {
    pub fn new(pattern: RoutePattern, handler: Handler) -> Self {
        Self { pattern, handler }
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }
}

impl std::fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteEntry")
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

/// Insertion-ordered collection of route entries.
#[derive(Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    not_found: Option<Handler>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry after all existing ones.
    pub fn push(&mut self, pattern: RoutePattern, handler: Handler) {
        self.entries.push(RouteEntry::new(pattern, handler));
    }

    pub fn set_not_found(&mut self, handler: Handler) {
        self.not_found = Some(handler);
    }

    pub fn not_found(&self) -> Option<&Handler> {
        self.not_found.as_ref()
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best entry for an already normalized path.
    pub fn match_segments(&self, path: &[&str]) -> Option<RouteMatch<'_>> {
        find_match(path, &self.entries)
    }
}

impl std::fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteTable")
            .field("entries", &self.entries)
            .field("has_not_found", &self.not_found.is_some())
            .finish()
    }
}
