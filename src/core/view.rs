//! Per-core mediator registry and observer bus.
//!
//! The view owns two registries: the name-to-mediator map and the
//! name-to-observer-list map that is the actual pub/sub bus. Delivery is
//! synchronous-per-subscriber: observers for one notification run strictly in
//! subscription order, each awaited to completion before the next begins.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::{Arc, Weak};
use tokio::sync::RwLock;

use crate::core::CoreRegistry;
use crate::errors::CoreResult;
use crate::events::{ContextId, Notification, NotifyMethod, Observer, ObserverFuture};
use crate::mediators::BaseMediator;

/// The notification bus of one core.
pub struct View {
    key: String,
    registry: Weak<CoreRegistry>,
    observer_map: RwLock<HashMap<String, Vec<Observer>>>,
    mediator_map: DashMap<String, Arc<dyn BaseMediator>>,
}

impl View {
    pub(crate) fn new(key: &str, registry: Weak<CoreRegistry>) -> Self {
        Self {
            key: key.to_string(),
            registry,
            observer_map: RwLock::new(HashMap::new()),
            mediator_map: DashMap::new(),
        }
    }

    /// The multiton key of the owning core.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Append `observer` to the list for `name`, creating the list if absent.
    ///
    /// There is no duplicate detection: the same (callback, context) pair
    /// registered twice is invoked twice.
    pub async fn register_observer(&self, name: &str, observer: Observer) {
        let mut observer_map = self.observer_map.write().await;
        observer_map
            .entry(name.to_string())
            .or_default()
            .push(observer);
    }

    /// Remove the last observer registered for `name` on behalf of `context`.
    ///
    /// At most one observer is removed per call. Once the list for `name`
    /// empties, the name itself is dropped from the map; an empty list is
    /// never left behind.
    pub async fn remove_observer(&self, name: &str, context: ContextId) {
        let mut observer_map = self.observer_map.write().await;
        if let Some(observers) = observer_map.get_mut(name) {
            if let Some(position) = observers
                .iter()
                .rposition(|observer| observer.matches_context(context))
            {
                observers.remove(position);
            }
            if observers.is_empty() {
                observer_map.remove(name);
            }
        }
    }

    /// Deliver `notification` to every observer of its name, in subscription
    /// order, one fully completing before the next begins.
    ///
    /// Delivery iterates a shallow snapshot of the list taken at dispatch
    /// start, so a handler registering or removing observers for the same
    /// name cannot alter the in-flight delivery. This is a required
    /// invariant: the lists are mutable mid-dispatch. Nobody listening is a
    /// normal state, not an error. The first handler error aborts delivery to
    /// the observers not yet reached and propagates to the sender.
    pub async fn notify_observers(&self, notification: &Notification) -> CoreResult<()> {
        let snapshot = {
            let observer_map = self.observer_map.read().await;
            observer_map.get(notification.name()).cloned()
        };

        if let Some(observers) = snapshot {
            tracing::trace!(
                core = %self.key,
                notification = %notification.name(),
                observers = observers.len(),
                "notifying observers"
            );
            for observer in observers {
                observer.notify(notification.clone()).await?;
            }
        }
        Ok(())
    }

    /// Number of observers currently subscribed under `name`.
    pub async fn observer_count(&self, name: &str) -> usize {
        self.observer_map.read().await.get(name).map_or(0, Vec::len)
    }

    /// Register `mediator`, subscribing one shared observer under every
    /// declared interest.
    ///
    /// A name already registered is a no-op: the existing mediator keeps its
    /// registration and subscriptions (remove it first to replace it). One
    /// observer is shared across all interests so removal can strip every
    /// subscription with the mediator's single context identity.
    pub async fn register_mediator(&self, mediator: Arc<dyn BaseMediator>) {
        let name = mediator.name().to_string();
        // The map entry claims the name atomically; a concurrent duplicate
        // loses the claim and is ignored like any other duplicate.
        match self.mediator_map.entry(name.clone()) {
            Entry::Occupied(_) => {
                tracing::debug!(
                    core = %self.key,
                    mediator = %name,
                    "mediator already registered, ignoring"
                );
                return;
            }
            Entry::Vacant(vacant) => {
                if let Some(registry) = self.registry.upgrade() {
                    mediator.notifier().initialize(&self.key, &registry);
                }
                vacant.insert(Arc::clone(&mediator));
            }
        }

        let interests = mediator.notification_interests();
        if !interests.is_empty() {
            let handler = Arc::clone(&mediator);
            let notify: NotifyMethod = Arc::new(move |notification: Notification| {
                let handler = Arc::clone(&handler);
                let future: ObserverFuture = Box::pin(async move {
                    handler.handle_notification(&notification).await
                });
                future
            });
            let observer = Observer::new(notify, ContextId::of(&mediator));

            for interest in &interests {
                self.register_observer(interest, observer.clone()).await;
            }
        }

        tracing::debug!(core = %self.key, mediator = %name, "mediator registered");
        mediator.on_register().await;
    }

    /// Remove the mediator named `name`, unsubscribing it from every interest
    /// it currently declares, and return it.
    pub async fn remove_mediator(&self, name: &str) -> Option<Arc<dyn BaseMediator>> {
        let mediator = self.retrieve_mediator(name)?;

        // Interests are re-queried here, not cached from registration.
        let context = ContextId::of(&mediator);
        for interest in mediator.notification_interests() {
            self.remove_observer(&interest, context).await;
        }

        self.mediator_map.remove(name);
        tracing::debug!(core = %self.key, mediator = %name, "mediator removed");
        mediator.on_remove().await;
        Some(mediator)
    }

    pub fn retrieve_mediator(&self, name: &str) -> Option<Arc<dyn BaseMediator>> {
        self.mediator_map.get(name).map(|entry| Arc::clone(entry.value()))
    }

    pub fn has_mediator(&self, name: &str) -> bool {
        self.mediator_map.contains_key(name)
    }
}
