//! Navigation collaborator subsystem.
//!
//! # Data Flow
//! ```text
//! Host location changes (back/forward, external visit)
//!     → NavigationSource notifies subscribed listeners with the new path
//!     → Router dispatches
//!
//! Programmatic navigation:
//!     Router::navigate(path)
//!     → NavigationSource::set_path (updates displayed location, no notification)
//!     → Router dispatches directly
//!
//! Link clicks (optional):
//!     links.rs decides in-app vs external → Router::navigate
//! ```
//!
//! # Design Decisions
//! - The source is a trait object so the router has no ambient global state
//! - `set_path` never notifies, mirroring history.pushState vs popstate
//! - Subscriptions unsubscribe on drop

pub mod links;
pub mod location;
pub mod memory;

use std::sync::Arc;

pub use links::{LinkClick, LinkInterceptor};
pub use location::UrlMode;
pub use memory::MemoryHistory;

/// Callback invoked with the new path on every location change.
pub type PathListener = Arc<dyn Fn(&str) + Send + Sync>;

/// The host environment's notion of "current location".
pub trait NavigationSource: Send + Sync {
    /// The path currently displayed.
    fn current_path(&self) -> String;

    /// Display `path` as the current location without notifying listeners.
    fn set_path(&self, path: &str);

    /// Step back one entry in history, notifying listeners if the location changed.
    fn go_back(&self);

    /// Register a listener for location changes.
    fn subscribe(&self, listener: PathListener) -> Subscription;
}

/// Handle for a registered listener; dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes the listener"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Wrap the action that removes the listener.
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Unsubscribe now.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
