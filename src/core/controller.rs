//! Per-core command registry and dispatch.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::{Arc, Weak};

use crate::commands::CommandFactory;
use crate::core::{CoreRegistry, View};
use crate::errors::CoreResult;
use crate::events::{ContextId, Notification, NotifyMethod, Observer, ObserverFuture};

/// Bridges the observer bus to command instantiation and execution.
///
/// The controller subscribes itself (one observer per notification name, ever)
/// on the view; when that observer fires, the mapped factory produces a fresh
/// command which is bound to this core and executed with the original
/// notification passed through untouched.
pub struct Controller {
    key: String,
    registry: Weak<CoreRegistry>,
    view: Arc<View>,
    command_map: DashMap<String, CommandFactory>,
    self_ref: Weak<Controller>,
}

impl Controller {
    pub(crate) fn new(key: &str, view: Arc<View>, registry: Weak<CoreRegistry>) -> Arc<Self> {
        Arc::new_cyclic(|self_ref| Self {
            key: key.to_string(),
            registry,
            view,
            command_map: DashMap::new(),
            self_ref: self_ref.clone(),
        })
    }

    /// The multiton key of the owning core.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The controller's own context identity on the bus.
    fn context_id(&self) -> ContextId {
        ContextId::of_weak(&self.self_ref)
    }

    /// Map `name` to `factory`, subscribing the controller's dispatch observer
    /// on the first registration for that name.
    ///
    /// Re-registration replaces the factory (last writer wins) without adding
    /// a second subscription: a name is only ever subscribed once by the
    /// controller no matter how often its mapping changes.
    pub async fn register_command(&self, name: &str, factory: CommandFactory) {
        // The map entry claims the name atomically, so a concurrent
        // re-registration can never subscribe a second dispatch observer.
        let first_registration = match self.command_map.entry(name.to_string()) {
            Entry::Occupied(mut occupied) => {
                occupied.insert(factory);
                false
            }
            Entry::Vacant(vacant) => {
                vacant.insert(factory);
                true
            }
        };

        if first_registration {
            let controller = self.self_ref.clone();
            let notify: NotifyMethod = Arc::new(move |notification: Notification| {
                let controller = controller.clone();
                let future: ObserverFuture = Box::pin(async move {
                    match controller.upgrade() {
                        Some(controller) => controller.execute_command(&notification).await,
                        // Core torn down mid-flight; nothing left to dispatch to.
                        None => Ok(()),
                    }
                });
                future
            });
            self.view
                .register_observer(name, Observer::new(notify, self.context_id()))
                .await;
        }

        tracing::debug!(
            core = %self.key,
            command = %name,
            replaced = !first_registration,
            "command registered"
        );
    }

    /// Instantiate and execute the command mapped to the notification's name.
    ///
    /// No mapping is a normal state and a successful no-op.
    pub async fn execute_command(&self, notification: &Notification) -> CoreResult<()> {
        let factory = match self.command_map.get(notification.name()) {
            Some(entry) => Arc::clone(entry.value()),
            None => return Ok(()),
        };

        let command = factory();
        if let Some(registry) = self.registry.upgrade() {
            command.notifier().initialize(&self.key, &registry);
        }
        command.execute(notification).await
    }

    /// Drop the mapping for `name` and unsubscribe the dispatch observer.
    ///
    /// Later notifications of that name reach no command, but still reach any
    /// independently-registered mediators.
    pub async fn remove_command(&self, name: &str) {
        if self.command_map.remove(name).is_some() {
            self.view.remove_observer(name, self.context_id()).await;
            tracing::debug!(core = %self.key, command = %name, "command removed");
        }
    }

    pub fn has_command(&self, name: &str) -> bool {
        self.command_map.contains_key(name)
    }
}
