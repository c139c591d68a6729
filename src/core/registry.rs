//! Explicit multiton container.
//!
//! Instead of process-global instance maps, all cores live in a
//! [`CoreRegistry`] owned by whatever manages the application's lifetime (a
//! `main`, a test fixture, an embedding host). Independent registries never
//! collide, even for identical keys.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

use crate::core::{Controller, Facade, Model, View};
use crate::errors::{CoreError, CoreResult};

/// Registry of multiton cores keyed by opaque string.
///
/// Exactly one [`Facade`] (owning one Model, View, and Controller) exists per
/// key at any time. Cores are created lazily on first access and torn down as
/// a unit with [`remove_core`](CoreRegistry::remove_core), after which the key
/// is immediately reusable.
pub struct CoreRegistry {
    facades: DashMap<String, Arc<Facade>>,
}

impl CoreRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            facades: DashMap::new(),
        })
    }

    /// Get the core for `key`, constructing it on first access.
    pub fn facade(self: &Arc<Self>, key: &str) -> Arc<Facade> {
        self.facades
            .entry(key.to_string())
            .or_insert_with(|| Facade::new(key, Arc::downgrade(self)))
            .value()
            .clone()
    }

    /// Construct the core for `key`, failing fast when the key is in use.
    ///
    /// The existing instance is NOT returned on conflict; callers who want
    /// get-or-create semantics use [`facade`](CoreRegistry::facade).
    pub fn try_create(self: &Arc<Self>, key: &str) -> CoreResult<Arc<Facade>> {
        match self.facades.entry(key.to_string()) {
            Entry::Occupied(_) => Err(CoreError::CoreAlreadyExists {
                key: key.to_string(),
            }),
            Entry::Vacant(vacant) => {
                let facade = Facade::new(key, Arc::downgrade(self));
                vacant.insert(Arc::clone(&facade));
                Ok(facade)
            }
        }
    }

    pub fn model(self: &Arc<Self>, key: &str) -> Arc<Model> {
        self.facade(key).model()
    }

    pub fn view(self: &Arc<Self>, key: &str) -> Arc<View> {
        self.facade(key).view()
    }

    pub fn controller(self: &Arc<Self>, key: &str) -> Arc<Controller> {
        self.facade(key).controller()
    }

    pub fn has_core(&self, key: &str) -> bool {
        self.facades.contains_key(key)
    }

    /// Number of live cores (useful for debugging/monitoring).
    pub fn core_count(&self) -> usize {
        self.facades.len()
    }

    /// Tear down the core for `key`: its Model, View, and Controller go with
    /// the facade, atomically from the caller's perspective. No notification
    /// is dispatched during teardown. Unknown keys are a no-op.
    pub fn remove_core(&self, key: &str) {
        if self.facades.remove(key).is_some() {
            tracing::debug!(core = %key, "core removed");
        }
    }
}
