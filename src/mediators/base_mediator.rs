use async_trait::async_trait;

use crate::errors::CoreResult;
use crate::events::{Notification, Notifier};

/// Core trait for view mediators.
///
/// A mediator declares the notification names it cares about and handles
/// matching notifications delivered by the [`View`](crate::core::View). The
/// view treats mediators as opaque registrants; whatever they mediate (UI
/// widgets, terminals, nothing at all) is invisible to the bus.
#[async_trait]
pub trait BaseMediator: Send + Sync {
    /// The name of the mediator - must be unique within a core.
    fn name(&self) -> &str;

    /// The notifier the view binds to this core at registration time.
    fn notifier(&self) -> &Notifier;

    /// Notification names this mediator wants delivered.
    ///
    /// Queried once at registration and again, freshly, at removal. Return
    /// the current interest set on every call; the view uses the removal-time
    /// answer to strip subscriptions, so a stale cache leaks observers.
    fn notification_interests(&self) -> Vec<String> {
        Vec::new()
    }

    /// Handle one notification matching a declared interest.
    ///
    /// Errors are not swallowed by the bus: they abort the in-flight delivery
    /// and propagate to whoever sent the notification.
    async fn handle_notification(&self, notification: &Notification) -> CoreResult<()> {
        let _ = notification;
        Ok(())
    }

    /// Called after the mediator is stored and its interests subscribed.
    async fn on_register(&self) {}

    /// Called after the mediator and its subscriptions are removed.
    async fn on_remove(&self) {}
}
