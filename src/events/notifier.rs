//! Notifier capability embedded in every registrant.
//!
//! Proxies, mediators, and commands each carry a [`Notifier`] by value. The
//! owning registry binds it to a multiton key when the registrant is
//! registered; from then on the registrant can publish notifications without
//! holding a direct reference to any other collaborator.

use crate::core::{CoreRegistry, Facade};
use crate::errors::{CoreError, CoreResult};
use serde_json::Value;
use std::sync::{Arc, OnceLock, Weak};

#[derive(Clone)]
struct Binding {
    key: String,
    registry: Weak<CoreRegistry>,
}

/// Lazily-bound handle to one core's [`Facade`].
///
/// Binding happens once, at registration time; later binds are no-ops. Using
/// the notifier before it is bound is a distinct failure
/// ([`CoreError::NotifierUnbound`]) rather than an absent result, so callers
/// can tell "used too early" apart from "nothing registered".
#[derive(Clone, Default)]
pub struct Notifier {
    binding: OnceLock<Binding>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind this notifier to the core identified by `key`. First bind wins.
    pub(crate) fn initialize(&self, key: &str, registry: &Arc<CoreRegistry>) {
        let _ = self.binding.set(Binding {
            key: key.to_string(),
            registry: Arc::downgrade(registry),
        });
    }

    /// Propagate another notifier's binding, e.g. from a composite command to
    /// its sub-commands. No-op while `other` is itself unbound.
    pub(crate) fn initialize_from(&self, other: &Notifier) {
        if let Some(binding) = other.binding.get() {
            let _ = self.binding.set(binding.clone());
        }
    }

    /// The multiton key this notifier is bound to, if any.
    pub fn multiton_key(&self) -> Option<&str> {
        self.binding.get().map(|binding| binding.key.as_str())
    }

    pub fn is_bound(&self) -> bool {
        self.binding.get().is_some()
    }

    /// Resolve the facade of the bound core.
    ///
    /// Resolution is lazy: the facade is looked up (or recreated) in the
    /// registry on every call, so a core removed and re-created under the same
    /// key is picked up transparently.
    pub fn facade(&self) -> CoreResult<Arc<Facade>> {
        let binding = self
            .binding
            .get()
            .ok_or_else(|| CoreError::NotifierUnbound {
                context: "facade access before multiton key binding".into(),
            })?;
        let registry = binding
            .registry
            .upgrade()
            .ok_or_else(|| CoreError::CoreRegistryGone {
                key: binding.key.clone(),
            })?;
        Ok(registry.facade(&binding.key))
    }

    /// Publish a notification by name through the bound core's facade.
    pub async fn send_notification(
        &self,
        name: &str,
        body: Option<Value>,
        kind: Option<&str>,
    ) -> CoreResult<()> {
        self.facade()?.send_notification(name, body, kind).await
    }
}
