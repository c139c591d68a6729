//! Per-core proxy registry.

use dashmap::DashMap;
use std::sync::{Arc, Weak};

use crate::core::CoreRegistry;
use crate::proxies::BaseProxy;

/// Name-to-proxy registry owned by one core.
///
/// Registering under an existing name replaces the map slot without invoking
/// removal hooks on the displaced entry. That asymmetry with the mediator
/// registry (which ignores duplicates) is deliberate and load-bearing for
/// existing registrants; do not unify the two policies.
pub struct Model {
    key: String,
    registry: Weak<CoreRegistry>,
    proxy_map: DashMap<String, Arc<dyn BaseProxy>>,
}

impl Model {
    pub(crate) fn new(key: &str, registry: Weak<CoreRegistry>) -> Self {
        Self {
            key: key.to_string(),
            registry,
            proxy_map: DashMap::new(),
        }
    }

    /// The multiton key of the owning core.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Bind `proxy` to this core, store it, and fire its register hook.
    pub async fn register_proxy(&self, proxy: Arc<dyn BaseProxy>) {
        if let Some(registry) = self.registry.upgrade() {
            proxy.notifier().initialize(&self.key, &registry);
        }

        let name = proxy.name().to_string();
        let displaced = self.proxy_map.insert(name.clone(), Arc::clone(&proxy));
        if displaced.is_some() {
            // Overwrite semantics: the displaced proxy gets no on_remove.
            tracing::debug!(core = %self.key, proxy = %name, "proxy overwritten");
        }

        proxy.on_register().await;
    }

    /// Remove the proxy named `name`, firing its remove hook if it existed.
    pub async fn remove_proxy(&self, name: &str) -> Option<Arc<dyn BaseProxy>> {
        let removed = self.proxy_map.remove(name).map(|(_, proxy)| proxy);
        if let Some(proxy) = &removed {
            tracing::debug!(core = %self.key, proxy = %name, "proxy removed");
            proxy.on_remove().await;
        }
        removed
    }

    pub fn retrieve_proxy(&self, name: &str) -> Option<Arc<dyn BaseProxy>> {
        self.proxy_map.get(name).map(|entry| Arc::clone(entry.value()))
    }

    pub fn has_proxy(&self, name: &str) -> bool {
        self.proxy_map.contains_key(name)
    }
}
