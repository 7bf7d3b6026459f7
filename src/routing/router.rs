//! Route registration and dispatch.
//!
//! # Responsibilities
//! - Parse and store routes in registration order
//! - Subscribe to the navigation source on `start`
//! - Normalize, match and invoke handlers for each path change
//! - Programmatic navigation through the source
//!
//! # Design Decisions
//! - The table lives in an `ArcSwap`: registration publishes a new table,
//!   dispatch works on a snapshot and never holds a lock while a handler runs
//! - Malformed patterns fail at registration, never during dispatch
//! - NoMatch is not an error: the not-found hook runs if set, otherwise nothing
//! - The subscription holds a `Weak` back-reference, so dropping the router
//!   releases it even while subscribed

use std::sync::{Arc, Mutex, Weak};

use arc_swap::ArcSwap;
use serde::Serialize;

use crate::navigation::{NavigationSource, Subscription};
use crate::routing::context::{Context, Handler, Params};
use crate::routing::error::{RouterError, RouterResult};
use crate::routing::normalize::normalize;
use crate::routing::pattern::RoutePattern;
use crate::routing::table::RouteTable;

/// Outcome of matching a path without dispatching it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    /// The matched pattern as registered.
    pub route: String,
    pub params: Params,
}

struct Inner {
    table: ArcSwap<RouteTable>,
    source: Arc<dyn NavigationSource>,
    subscription: Mutex<Option<Subscription>>,
}

impl Inner {
    fn path_changed(&self, path: &str, initial_load: bool) {
        let table = self.table.load_full();
        let segments = normalize(path);

        let (handler, params) = match table.match_segments(&segments) {
            Some(found) => {
                tracing::debug!(
                    path = %path,
                    route = %found.pattern(),
                    params = found.params().len(),
                    initial_load,
                    "Route matched"
                );
                (found.handler().clone(), found.into_params())
            }
            None => match table.not_found() {
                Some(handler) => {
                    tracing::debug!(path = %path, "No route matched, running not-found handler");
                    (handler.clone(), Params::new())
                }
                None => {
                    tracing::debug!(path = %path, "No route matched");
                    return;
                }
            },
        };

        let context = Context {
            path: path.to_string(),
            params,
            initial_load,
        };
        handler(&context);
    }
}

/// Client-side router.
///
/// Cloning yields another handle to the same router.
#[derive(Clone)]
pub struct Router {
    inner: Arc<Inner>,
}

impl Router {
    /// Create an unstarted router bound to `source`.
    pub fn new(source: Arc<dyn NavigationSource>) -> Self {
        Self {
            inner: Arc::new(Inner {
                table: ArcSwap::from_pointee(RouteTable::new()),
                source,
                subscription: Mutex::new(None),
            }),
        }
    }

    /// Register `handler` for `pattern`.
    ///
    /// Patterns are `/`-separated; a segment written `{name}` binds the
    /// matching path segment to `name`, any other segment must match exactly.
    pub fn handle<F>(&self, pattern: &str, handler: F) -> RouterResult<()>
    where
        F: Fn(&Context) + Send + Sync + 'static,
    {
        let parsed = RoutePattern::parse(pattern).map_err(|source| RouterError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        let handler: Handler = Arc::new(handler);

        self.inner.table.rcu(|table| {
            let mut next = RouteTable::clone(table);
            next.push(parsed.clone(), handler.clone());
            next
        });
        tracing::debug!(pattern = %pattern, "Route registered");
        Ok(())
    }

    /// Set the handler run when no route matches.
    pub fn not_found<F>(&self, handler: F)
    where
        F: Fn(&Context) + Send + Sync + 'static,
    {
        let handler: Handler = Arc::new(handler);
        self.inner.table.rcu(|table| {
            let mut next = RouteTable::clone(table);
            next.set_not_found(handler.clone());
            next
        });
    }

    /// Start reacting to location changes and dispatch the current path once.
    pub fn start(&self) -> RouterResult<()> {
        {
            let mut subscription = self
                .inner
                .subscription
                .lock()
                .expect("router subscription mutex poisoned");
            if subscription.is_some() {
                return Err(RouterError::AlreadyStarted);
            }

            let weak: Weak<Inner> = Arc::downgrade(&self.inner);
            *subscription = Some(self.inner.source.subscribe(Arc::new(move |path: &str| {
                if let Some(inner) = weak.upgrade() {
                    inner.path_changed(path, false);
                }
            })));
        }

        let current = self.inner.source.current_path();
        tracing::info!(
            path = %current,
            routes = self.inner.table.load().len(),
            "Router started"
        );
        self.inner.path_changed(&current, true);
        Ok(())
    }

    /// Stop reacting to location changes. Does nothing if not started.
    pub fn stop(&self) {
        let subscription = self
            .inner
            .subscription
            .lock()
            .expect("router subscription mutex poisoned")
            .take();
        if let Some(subscription) = subscription {
            subscription.cancel();
            tracing::info!("Router stopped");
        }
    }

    pub fn is_started(&self) -> bool {
        self.inner
            .subscription
            .lock()
            .expect("router subscription mutex poisoned")
            .is_some()
    }

    /// Display `path` through the navigation source, then dispatch it.
    pub fn navigate(&self, path: &str) {
        self.inner.source.set_path(path);
        self.inner.path_changed(path, false);
    }

    /// The path the navigation source currently displays.
    pub fn current_path(&self) -> String {
        self.inner.source.current_path()
    }

    /// Step back in history; the source notifies and, if started, the router dispatches.
    pub fn back(&self) {
        self.inner.source.go_back();
    }

    /// Match `path` without invoking any handler.
    pub fn resolve(&self, path: &str) -> Option<Resolved> {
        let table = self.inner.table.load();
        table.match_segments(&normalize(path)).map(|found| Resolved {
            route: found.pattern().as_str().to_string(),
            params: found.into_params(),
        })
    }

    /// Registered patterns in registration order.
    pub fn routes(&self) -> Vec<String> {
        self.inner
            .table
            .load()
            .entries()
            .iter()
            .map(|entry| entry.pattern().as_str().to_string())
            .collect()
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes())
            .field("started", &self.is_started())
            .finish()
    }
}
