//! Router assembly from configuration.
//!
//! # Responsibilities
//! - Create the navigation source for the configured URL mode
//! - Register every configured route with a shared dispatch sink
//! - Wire link interception when enabled
//!
//! # Design Decisions
//! - Every route reports through one callback; hosts branch on the label
//! - Unmatched paths are reported too, with no route

use std::sync::Arc;

use serde::Serialize;
use url::Url;

use crate::config::RouterConfig;
use crate::navigation::{LinkClick, LinkInterceptor, MemoryHistory};
use crate::routing::{Context, Params, Router, RouterResult};

/// One handler invocation, as reported to the dispatch sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dispatch {
    /// Label of the matched route, `None` when nothing matched.
    pub route: Option<String>,
    pub path: String,
    pub params: Params,
    pub initial_load: bool,
}

impl Dispatch {
    fn new(route: Option<String>, ctx: &Context) -> Self {
        Self {
            route,
            path: ctx.path.clone(),
            params: ctx.params.clone(),
            initial_load: ctx.initial_load,
        }
    }
}

/// A configured router over an in-memory history.
#[derive(Debug)]
pub struct App {
    router: Router,
    history: Arc<MemoryHistory>,
    links: Option<LinkInterceptor>,
}

impl App {
    /// Build the router described by `config`, starting at `initial_path`.
    ///
    /// `config` is expected to be validated; a malformed pattern still
    /// surfaces as an error here.
    pub fn from_config<F>(config: &RouterConfig, initial_path: &str, sink: F) -> RouterResult<Self>
    where
        F: Fn(Dispatch) + Send + Sync + 'static,
    {
        let sink = Arc::new(sink);
        let history = Arc::new(MemoryHistory::with_mode(config.mode, initial_path));
        let router = Router::new(history.clone());

        for route in &config.routes {
            let label = route.label().to_string();
            let sink = sink.clone();
            router.handle(&route.pattern, move |ctx| {
                sink(Dispatch::new(Some(label.clone()), ctx))
            })?;
        }
        let missed = sink.clone();
        router.not_found(move |ctx| missed(Dispatch::new(None, ctx)));

        // Origin was checked by validation; an unparsable one disables interception.
        let links = match (config.intercept_links, Url::parse(&config.origin)) {
            (true, Ok(origin)) => Some(LinkInterceptor::new(router.clone(), origin, config.mode)),
            (true, Err(e)) => {
                tracing::warn!(origin = %config.origin, error = %e, "Link interception disabled");
                None
            }
            (false, _) => None,
        };

        Ok(Self {
            router,
            history,
            links,
        })
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn history(&self) -> &MemoryHistory {
        &self.history
    }

    /// Handle a link click. Returns false when interception is disabled or
    /// the link leaves the app.
    pub fn click(&self, click: &LinkClick) -> bool {
        self.links
            .as_ref()
            .is_some_and(|links| links.intercept(click))
    }
}
