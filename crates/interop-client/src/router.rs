//! Single-channel callback routing.
//!
//! The platform invokes one shared endpoint for every notification a client
//! has subscribed to — range changes, delta feeds, menu clicks, task-pane
//! buttons. Each notification carries the correlation identifier the remote
//! side issued when the subscription was created, and the router maps it
//! back to the locally-owned handler.
//!
//! Lifecycle rules:
//! - inserting under an existing identifier replaces the previous handler;
//! - removal is idempotent;
//! - a notification whose identifier is unknown (including one racing the
//!   local insert of a just-created subscription) is dropped with a warning,
//!   never an error.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use interop_protocol::CallbackEvent;

/// A locally-owned notification handler.
pub type CallbackHandler = Arc<dyn Fn(&CallbackEvent) + Send + Sync>;

/// Routes notifications from the shared callback endpoint to handlers by
/// correlation identifier.
///
/// Insert, remove and dispatch may run concurrently from independent tasks;
/// the map is guarded by a mutex and handlers run after the lock is
/// released, so a handler may re-enter the router (subscribe, unsubscribe)
/// without deadlocking.
#[derive(Default)]
pub struct CallbackRouter {
    handlers: Mutex<HashMap<String, CallbackHandler>>,
}

impl CallbackRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate a handler with a correlation identifier, replacing any
    /// previous handler under the same identifier.
    pub fn insert(&self, id: impl Into<String>, handler: CallbackHandler) {
        let id = id.into();
        tracing::debug!("Registering callback handler for '{id}'");
        self.handlers.lock().unwrap().insert(id, handler);
    }

    /// Remove the handler for an identifier. Removing an unknown identifier
    /// is a no-op; returns whether a handler was present.
    pub fn remove(&self, id: &str) -> bool {
        let removed = self.handlers.lock().unwrap().remove(id).is_some();
        if removed {
            tracing::debug!("Removed callback handler for '{id}'");
        }
        removed
    }

    /// Whether a handler is currently registered for the identifier.
    pub fn contains(&self, id: &str) -> bool {
        self.handlers.lock().unwrap().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.handlers.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.lock().unwrap().is_empty()
    }

    /// Route a notification to its handler.
    ///
    /// Unknown identifiers and identifier-less payloads are dropped with a
    /// diagnostic. The handler runs outside the registry lock.
    pub fn dispatch(&self, event: &CallbackEvent) {
        let Some(id) = event.subscription_id.as_deref() else {
            tracing::warn!("Dropping notification without a subscription id");
            return;
        };

        let handler = self.handlers.lock().unwrap().get(id).cloned();
        match handler {
            Some(handler) => handler(event),
            None => {
                tracing::warn!("No handler for subscription '{id}', dropping notification");
            }
        }
    }

    /// Decode a raw endpoint payload and route it.
    ///
    /// This is the entry point wired into the shared endpoint registration.
    /// Undecodable payloads are dropped with a diagnostic — the endpoint
    /// must never propagate a failure back into the platform.
    pub fn dispatch_raw(&self, payload: Value) {
        match serde_json::from_value::<CallbackEvent>(payload) {
            Ok(event) => self.dispatch(&event),
            Err(e) => {
                tracing::warn!("Dropping undecodable notification payload: {e}");
            }
        }
    }
}

impl std::fmt::Debug for CallbackRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRouter")
            .field("handlers", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc;

    fn counting_handler(counter: Arc<AtomicUsize>) -> CallbackHandler {
        Arc::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn dispatch_of_unknown_id_is_a_no_op() {
        let router = CallbackRouter::new();
        // Must not panic, must not do anything observable.
        router.dispatch(&CallbackEvent::for_subscription("never-inserted"));
        router.dispatch_raw(serde_json::json!({ "subscriptionId": "also-unknown" }));
        router.dispatch_raw(serde_json::json!({ "noId": true }));
        router.dispatch_raw(serde_json::json!("not even an object"));
    }

    #[test]
    fn handler_receives_exactly_the_payload() {
        let router = CallbackRouter::new();
        let (tx, rx) = mpsc::channel();
        router.insert(
            "sub-1",
            Arc::new(move |event: &CallbackEvent| {
                tx.send(event.clone()).unwrap();
            }),
        );

        let event: CallbackEvent = serde_json::from_value(serde_json::json!({
            "subscriptionId": "sub-1",
            "origin": "Sheet1!A1",
            "deltas": [["x", 1]],
        }))
        .unwrap();
        router.dispatch(&event);

        let received = rx.recv().unwrap();
        assert_eq!(received, event);
    }

    #[test]
    fn second_insert_replaces_the_first() {
        let router = CallbackRouter::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        router.insert("sub-1", counting_handler(first.clone()));
        router.insert("sub-1", counting_handler(second.clone()));
        assert_eq!(router.len(), 1);

        router.dispatch(&CallbackEvent::for_subscription("sub-1"));
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn removed_handler_is_not_invoked() {
        let router = CallbackRouter::new();
        let count = Arc::new(AtomicUsize::new(0));
        router.insert("sub-1", counting_handler(count.clone()));

        assert!(router.remove("sub-1"));
        router.dispatch(&CallbackEvent::for_subscription("sub-1"));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn remove_of_absent_id_is_idempotent() {
        let router = CallbackRouter::new();
        assert!(!router.remove("missing"));
        router.insert("sub-1", counting_handler(Arc::new(AtomicUsize::new(0))));
        assert!(router.remove("sub-1"));
        assert!(!router.remove("sub-1"));
    }

    #[test]
    fn handler_may_reenter_the_router() {
        let router = Arc::new(CallbackRouter::new());
        let reentrant = router.clone();
        router.insert(
            "sub-1",
            Arc::new(move |event: &CallbackEvent| {
                // Unsubscribe-from-within-callback must not deadlock.
                reentrant.remove(event.subscription_id.as_deref().unwrap());
            }),
        );

        router.dispatch(&CallbackEvent::for_subscription("sub-1"));
        assert!(router.is_empty());
    }

    #[test]
    fn concurrent_operations_on_disjoint_ids_do_not_lose_updates() {
        const WORKERS: usize = 8;
        const PER_WORKER: usize = 100;

        let router = Arc::new(CallbackRouter::new());
        let delivered = Arc::new(AtomicUsize::new(0));

        let threads: Vec<_> = (0..WORKERS)
            .map(|w| {
                let router = router.clone();
                let delivered = delivered.clone();
                std::thread::spawn(move || {
                    for i in 0..PER_WORKER {
                        let id = format!("sub-{w}-{i}");
                        router.insert(id.as_str(), counting_handler(delivered.clone()));
                        router.dispatch(&CallbackEvent::for_subscription(&id));
                        assert!(router.remove(&id));
                        // Late notification after removal: dropped, no panic.
                        router.dispatch(&CallbackEvent::for_subscription(&id));
                    }
                })
            })
            .collect();

        for t in threads {
            t.join().unwrap();
        }

        assert_eq!(delivered.load(Ordering::SeqCst), WORKERS * PER_WORKER);
        assert!(router.is_empty());
    }
}
