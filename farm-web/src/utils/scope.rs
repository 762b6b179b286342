//! Page-scoped cancellation for in-flight requests.
//!
//! The UI runtime has no request cancellation of its own: a slow response
//! arriving after navigation away would otherwise try to write to signals
//! of a disposed page. Each page creates one [`PageScope`]; async
//! continuations check [`PageScope::is_alive`] before touching any signal.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::on_cleanup;

/// Alive flag bound to the owning component's lifetime.
///
/// Backed by an atomic so the flag can ride through the cleanup
/// registry's `Send + Sync` closure bound.
#[derive(Clone)]
pub struct PageScope(Arc<AtomicBool>);

impl PageScope {
    /// Create a scope tied to the current reactive owner; it flips dead
    /// when the component is cleaned up.
    pub fn new() -> Self {
        let flag = Arc::new(AtomicBool::new(true));
        let for_cleanup = Arc::clone(&flag);
        on_cleanup(move || for_cleanup.store(false, Ordering::Relaxed));
        Self(flag)
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn send_sync_cleanup<F: FnOnce() + Send + Sync>(_f: F) {}

    #[test]
    fn cleanup_closure_over_the_flag_is_send_and_sync() {
        let flag = Arc::new(AtomicBool::new(true));
        let for_cleanup = Arc::clone(&flag);
        send_sync_cleanup(move || for_cleanup.store(false, Ordering::Relaxed));
    }

    #[test]
    fn scope_goes_dead_when_the_flag_flips() {
        let flag = Arc::new(AtomicBool::new(true));
        let scope = PageScope(Arc::clone(&flag));
        let clone = scope.clone();
        assert!(scope.is_alive());
        flag.store(false, Ordering::Relaxed);
        assert!(!scope.is_alive());
        assert!(!clone.is_alive());
    }
}
