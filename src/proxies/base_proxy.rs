use async_trait::async_trait;

use crate::events::Notifier;

/// Core trait for data proxies.
///
/// A proxy is a named holder of application data with no bus-interest
/// mechanism of its own. The [`Model`](crate::core::Model) references proxies
/// but never owns them: removal severs the reference and fires the lifecycle
/// hook, nothing more.
#[async_trait]
pub trait BaseProxy: Send + Sync {
    /// The name of the proxy - must be unique within a core.
    fn name(&self) -> &str;

    /// The notifier the model binds to this core at registration time.
    fn notifier(&self) -> &Notifier;

    /// Called after the proxy is stored in the model.
    async fn on_register(&self) {}

    /// Called after the proxy is removed from the model.
    async fn on_remove(&self) {}
}
