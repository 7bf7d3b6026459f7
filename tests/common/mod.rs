//! Shared utilities for integration tests.

use std::sync::{Arc, Mutex};

use spa_router::{Context, MemoryHistory, Router};

/// One recorded handler call: the pattern that fired and its context.
pub type Call = (String, Context);

/// A router over an in-memory history that records every handler call.
pub struct Recorder {
    pub router: Router,
    pub history: Arc<MemoryHistory>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl Recorder {
    /// Register every pattern with a handler that records the pattern name.
    pub fn new(initial_path: &str, patterns: &[&str]) -> Self {
        let history = Arc::new(MemoryHistory::new(initial_path));
        let router = Router::new(history.clone());
        let calls = Arc::new(Mutex::new(Vec::new()));

        for pattern in patterns {
            let calls = calls.clone();
            let name = pattern.to_string();
            router
                .handle(pattern, move |ctx| {
                    calls.lock().unwrap().push((name.clone(), ctx.clone()));
                })
                .unwrap();
        }

        Self {
            router,
            history,
            calls,
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Patterns that fired, in order.
    #[allow(dead_code)]
    pub fn routes(&self) -> Vec<String> {
        self.calls().into_iter().map(|(route, _)| route).collect()
    }

    #[allow(dead_code)]
    pub fn last(&self) -> Option<Call> {
        self.calls().pop()
    }
}
