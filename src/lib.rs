//! Client-side path router.
//!
//! Routes are `/`-separated patterns whose `{name}` segments bind path
//! segments to names. A [`Router`] picks the most specific matching route
//! for each location change reported by a [`NavigationSource`] and calls its
//! handler with the bound parameters.
//!
//! ```
//! use std::sync::Arc;
//! use spa_router::{MemoryHistory, Router};
//!
//! let history = Arc::new(MemoryHistory::new("/"));
//! let router = Router::new(history);
//! router
//!     .handle("/greet/{name}", |ctx| {
//!         println!("Hello, {}", ctx.params.get("name").unwrap_or("stranger"));
//!     })
//!     .unwrap();
//! router.start().unwrap();
//! router.navigate("/greet/ada");
//! ```

pub mod app;
pub mod config;
pub mod navigation;
pub mod observability;
pub mod routing;

pub use app::{App, Dispatch};
pub use config::RouterConfig;
pub use navigation::{LinkClick, LinkInterceptor, MemoryHistory, NavigationSource, UrlMode};
pub use routing::{Context, Params, Router, RouterError};
