use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use super::RequestEvent;

/// Receives run lifecycle notifications.
///
/// Callbacks run on the simulated user's task that produced the event, so
/// implementations must be cheap and thread-safe.
pub trait EventListener: Send + Sync {
    fn on_request_completed(&self, event: &RequestEvent);

    fn on_test_stopped(&self) {}
}

/// Listener registry shared by every simulated user of a run.
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<Arc<dyn EventListener>>,
    stopped: AtomicBool,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Arc<dyn EventListener>) {
        self.listeners.push(listener);
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn request_completed(&self, event: &RequestEvent) {
        for listener in &self.listeners {
            listener.on_request_completed(event);
        }
    }

    /// Fires `on_test_stopped` on every listener. Only the first call has an
    /// effect.
    pub fn test_stopped(&self) {
        if self.stopped.swap(true, Ordering::AcqRel) {
            debug!("test_stopped already delivered; ignoring.");
            return;
        }
        for listener in &self.listeners {
            listener.on_test_stopped();
        }
    }
}
