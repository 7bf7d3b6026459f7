//! In-memory history stack.
//!
//! # Responsibilities
//! - Track displayed locations with back/forward positions
//! - Notify listeners on traversal and external visits
//! - Format locations per `UrlMode`
//!
//! # Design Decisions
//! - Listener list is snapshotted before notifying, so listeners may
//!   navigate or unsubscribe re-entrantly without deadlocking
//! - Pushing a new entry discards the forward entries, as browsers do

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use crate::navigation::location::UrlMode;
use crate::navigation::{NavigationSource, PathListener, Subscription};

type Listeners = Mutex<Vec<(u64, PathListener)>>;

#[derive(Debug)]
struct Stack {
    locations: Vec<String>,
    index: usize,
}

/// A [`NavigationSource`] backed by an in-memory stack of locations.
pub struct MemoryHistory {
    mode: UrlMode,
    stack: Mutex<Stack>,
    listeners: Arc<Listeners>,
    next_id: AtomicU64,
}

impl MemoryHistory {
    /// Create a history whose only entry is `initial_path`.
    pub fn new(initial_path: &str) -> Self {
        Self::with_mode(UrlMode::History, initial_path)
    }

    pub fn with_mode(mode: UrlMode, initial_path: &str) -> Self {
        Self {
            mode,
            stack: Mutex::new(Stack {
                locations: vec![mode.to_location(initial_path)],
                index: 0,
            }),
            listeners: Arc::new(Mutex::new(Vec::new())),
            next_id: AtomicU64::new(0),
        }
    }

    pub fn mode(&self) -> UrlMode {
        self.mode
    }

    /// The current location as displayed (`#`-prefixed in hash mode).
    pub fn location(&self) -> String {
        let stack = self.stack.lock().expect("history mutex poisoned");
        stack.locations[stack.index].clone()
    }

    /// Every location in the stack, oldest first.
    pub fn locations(&self) -> Vec<String> {
        self.stack
            .lock()
            .expect("history mutex poisoned")
            .locations
            .clone()
    }

    /// Simulate a location change made outside the app (address bar, link
    /// from another page): push the entry and notify listeners.
    pub fn visit(&self, path: &str) {
        self.push(path);
        self.notify(path);
    }

    /// Step forward one entry, notifying listeners if the location changed.
    pub fn go_forward(&self) {
        let moved = {
            let mut stack = self.stack.lock().expect("history mutex poisoned");
            if stack.index + 1 < stack.locations.len() {
                stack.index += 1;
                Some(self.mode.to_path(&stack.locations[stack.index]))
            } else {
                None
            }
        };
        if let Some(path) = moved {
            self.notify(&path);
        }
    }

    /// Number of subscribed listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().expect("listener mutex poisoned").len()
    }

    fn push(&self, path: &str) {
        let mut stack = self.stack.lock().expect("history mutex poisoned");
        let next = stack.index + 1;
        stack.locations.truncate(next);
        stack.locations.push(self.mode.to_location(path));
        stack.index = next;
    }

    fn notify(&self, path: &str) {
        let snapshot: Vec<PathListener> = self
            .listeners
            .lock()
            .expect("listener mutex poisoned")
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        tracing::trace!(path = %path, listeners = snapshot.len(), "Location changed");
        for listener in snapshot {
            listener(path);
        }
    }
}

impl NavigationSource for MemoryHistory {
    fn current_path(&self) -> String {
        self.mode.to_path(&self.location())
    }

    fn set_path(&self, path: &str) {
        self.push(path);
    }

    fn go_back(&self) {
        let moved = {
            let mut stack = self.stack.lock().expect("history mutex poisoned");
            if stack.index > 0 {
                stack.index -= 1;
                Some(self.mode.to_path(&stack.locations[stack.index]))
            } else {
                None
            }
        };
        if let Some(path) = moved {
            self.notify(&path);
        }
    }

    fn subscribe(&self, listener: PathListener) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners
            .lock()
            .expect("listener mutex poisoned")
            .push((id, listener));

        let registry: Weak<Listeners> = Arc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(listeners) = registry.upgrade() {
                if let Ok(mut listeners) = listeners.lock() {
                    listeners.retain(|(entry_id, _)| *entry_id != id);
                }
            }
        })
    }
}

impl std::fmt::Debug for MemoryHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryHistory")
            .field("mode", &self.mode)
            .field("location", &self.location())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
