//! Handler types and the context passed to them.

use std::collections::btree_map::{self, BTreeMap};
use std::sync::Arc;

use serde::Serialize;

/// Callback registered for a route.
pub type Handler = Arc<dyn Fn(&Context) + Send + Sync>;

/// Parameter bindings extracted from a matched path.
///
/// Empty when the matched pattern has no `{name}` segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any earlier binding of the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// What a handler sees when its route is dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    /// The path that triggered the dispatch, as received.
    pub path: String,
    /// Bound parameters of the matched route.
    pub params: Params,
    /// True only for the dispatch performed by `Router::start`.
    pub initial_load: bool,
}
