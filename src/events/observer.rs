//! Observer wrappers for the notification bus.
//!
//! An [`Observer`] pairs an async callback with the identity of the context it
//! acts on behalf of. Removal matches on context identity alone, so a mediator
//! subscribed under many notification names can be stripped from every list
//! with one token.

use crate::errors::CoreResult;
use crate::events::Notification;
use futures::future::BoxFuture;
use std::future::Future;
use std::sync::{Arc, Weak};

/// Boxed future produced by an observer callback.
pub type ObserverFuture = BoxFuture<'static, CoreResult<()>>;

/// Shared async callback invoked with each matching notification.
pub type NotifyMethod = Arc<dyn Fn(Notification) -> ObserverFuture + Send + Sync>;

/// Identity token for an observer's context.
///
/// Derived from the data pointer of the `Arc` (or `Weak`) owning the context,
/// so equality means reference identity, never structural equality. The token
/// does not keep the context alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextId(usize);

impl ContextId {
    /// Identity of an `Arc`-owned context.
    pub fn of<T: ?Sized>(context: &Arc<T>) -> Self {
        Self(Arc::as_ptr(context).cast::<()>() as usize)
    }

    /// Identity of a weakly-held context. Matches [`ContextId::of`] for any
    /// `Arc` sharing the same allocation.
    pub fn of_weak<T>(context: &Weak<T>) -> Self {
        Self(Weak::as_ptr(context).cast::<()>() as usize)
    }
}

/// A (callback, context) subscription to notifications of one name.
///
/// Clones share the callback, so snapshotting an observer list is cheap.
#[derive(Clone)]
pub struct Observer {
    notify_method: NotifyMethod,
    notify_context: ContextId,
}

impl Observer {
    pub fn new(notify_method: NotifyMethod, notify_context: ContextId) -> Self {
        Self {
            notify_method,
            notify_context,
        }
    }

    /// Build an observer from a plain async function.
    pub fn from_fn<F, Fut>(notify: F, notify_context: ContextId) -> Self
    where
        F: Fn(Notification) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = CoreResult<()>> + Send + 'static,
    {
        let notify_method: NotifyMethod = Arc::new(move |notification| {
            let future: ObserverFuture = Box::pin(notify(notification));
            future
        });
        Self::new(notify_method, notify_context)
    }

    /// Invoke the callback with `notification`, awaiting its completion.
    pub async fn notify(&self, notification: Notification) -> CoreResult<()> {
        (self.notify_method)(notification).await
    }

    /// Whether this observer was registered on behalf of `context`.
    pub fn matches_context(&self, context: ContextId) -> bool {
        self.notify_context == context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn context_identity_is_per_allocation() {
        let a = Arc::new(());
        let b = Arc::new(());
        let a_again = Arc::clone(&a);

        assert_eq!(ContextId::of(&a), ContextId::of(&a_again));
        assert_ne!(ContextId::of(&a), ContextId::of(&b));
    }

    #[test]
    fn weak_identity_matches_strong() {
        let context = Arc::new(42u8);
        let weak = Arc::downgrade(&context);
        assert_eq!(ContextId::of(&context), ContextId::of_weak(&weak));
    }

    #[tokio::test]
    async fn notify_invokes_callback() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let context = Arc::new(());

        let observer = Observer::from_fn(
            move |notification| {
                let counter = Arc::clone(&counter);
                async move {
                    assert_eq!(notification.name(), "PING");
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }
            },
            ContextId::of(&context),
        );

        observer.notify(Notification::new("PING")).await.unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
