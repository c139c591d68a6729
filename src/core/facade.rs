//! Unified per-core entry point.

use serde_json::Value;
use std::sync::{Arc, Weak};

use crate::commands::CommandFactory;
use crate::core::{Controller, CoreRegistry, Model, View};
use crate::errors::CoreResult;
use crate::events::Notification;
use crate::mediators::BaseMediator;
use crate::proxies::BaseProxy;

/// One core's Model, View, and Controller behind a single surface.
///
/// Facades are created per multiton key through
/// [`CoreRegistry::facade`](crate::core::CoreRegistry::facade); the three
/// components are constructed together and owned exclusively by the facade,
/// so a key can never see a partially-built core.
pub struct Facade {
    key: String,
    model: Arc<Model>,
    view: Arc<View>,
    controller: Arc<Controller>,
}

impl std::fmt::Debug for Facade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Facade").field("key", &self.key).finish_non_exhaustive()
    }
}

impl Facade {
    pub(crate) fn new(key: &str, registry: Weak<CoreRegistry>) -> Arc<Self> {
        let model = Arc::new(Model::new(key, registry.clone()));
        let view = Arc::new(View::new(key, registry.clone()));
        let controller = Controller::new(key, Arc::clone(&view), registry);
        Arc::new(Self {
            key: key.to_string(),
            model,
            view,
            controller,
        })
    }

    /// The multiton key identifying this core.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn model(&self) -> Arc<Model> {
        Arc::clone(&self.model)
    }

    pub fn view(&self) -> Arc<View> {
        Arc::clone(&self.view)
    }

    pub fn controller(&self) -> Arc<Controller> {
        Arc::clone(&self.controller)
    }

    // ===== Model forwards =====

    pub async fn register_proxy(&self, proxy: Arc<dyn BaseProxy>) {
        self.model.register_proxy(proxy).await;
    }

    pub async fn remove_proxy(&self, name: &str) -> Option<Arc<dyn BaseProxy>> {
        self.model.remove_proxy(name).await
    }

    pub fn retrieve_proxy(&self, name: &str) -> Option<Arc<dyn BaseProxy>> {
        self.model.retrieve_proxy(name)
    }

    pub fn has_proxy(&self, name: &str) -> bool {
        self.model.has_proxy(name)
    }

    // ===== View forwards =====

    pub async fn register_mediator(&self, mediator: Arc<dyn BaseMediator>) {
        self.view.register_mediator(mediator).await;
    }

    pub async fn remove_mediator(&self, name: &str) -> Option<Arc<dyn BaseMediator>> {
        self.view.remove_mediator(name).await
    }

    pub fn retrieve_mediator(&self, name: &str) -> Option<Arc<dyn BaseMediator>> {
        self.view.retrieve_mediator(name)
    }

    pub fn has_mediator(&self, name: &str) -> bool {
        self.view.has_mediator(name)
    }

    // ===== Controller forwards =====

    pub async fn register_command(&self, name: &str, factory: CommandFactory) {
        self.controller.register_command(name, factory).await;
    }

    pub async fn remove_command(&self, name: &str) {
        self.controller.remove_command(name).await;
    }

    pub fn has_command(&self, name: &str) -> bool {
        self.controller.has_command(name)
    }

    // ===== Notification =====

    /// Construct a [`Notification`] and route it through the bus.
    pub async fn send_notification(
        &self,
        name: &str,
        body: Option<Value>,
        kind: Option<&str>,
    ) -> CoreResult<()> {
        let mut notification = Notification::new(name);
        notification.set_body(body);
        notification.set_kind(kind.map(str::to_string));
        self.notify_observers(&notification).await
    }

    /// Deliver an already-built notification to this core's observers.
    pub async fn notify_observers(&self, notification: &Notification) -> CoreResult<()> {
        self.view.notify_observers(notification).await
    }
}
