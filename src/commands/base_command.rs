use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::CoreResult;
use crate::events::{Notification, Notifier};

/// Core trait for commands - units of work bound to notification names.
///
/// Commands are never registered as live instances. The
/// [`Controller`](crate::core::Controller) stores a [`CommandFactory`] and
/// instantiates a fresh command per dispatch, binds its notifier to the
/// dispatching core, and awaits `execute`.
#[async_trait]
pub trait BaseCommand: Send + Sync {
    /// The notifier the controller binds before `execute` runs.
    fn notifier(&self) -> &Notifier;

    /// Perform the unit of work for one notification.
    async fn execute(&self, notification: &Notification) -> CoreResult<()>;
}

/// "Register a way to construct": a zero-argument factory producing a fresh
/// command instance per dispatch.
pub type CommandFactory = Arc<dyn Fn() -> Box<dyn BaseCommand> + Send + Sync>;

/// Wrap a plain constructor into a [`CommandFactory`].
pub fn command_factory<C, F>(make: F) -> CommandFactory
where
    C: BaseCommand + 'static,
    F: Fn() -> C + Send + Sync + 'static,
{
    Arc::new(move || Box::new(make()) as Box<dyn BaseCommand>)
}
