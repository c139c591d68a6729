//! Function-based command implementation.
//!
//! [`SimpleCommand`] turns an async closure into a [`BaseCommand`] without a
//! manual trait impl, the same way a function tool wraps a bare async fn. The
//! closure receives the notification and a clone of the command's bound
//! notifier, so command bodies can publish follow-up notifications.

use async_trait::async_trait;
use futures::future::BoxFuture;
use std::future::Future;

use super::base_command::BaseCommand;
use crate::errors::CoreResult;
use crate::events::{Notification, Notifier};

type CommandBody =
    Box<dyn Fn(Notification, Notifier) -> BoxFuture<'static, CoreResult<()>> + Send + Sync>;

/// A leaf command wrapping one async function.
///
/// The function is the sole extension point; a [`SimpleCommand::noop`] carries
/// no function and executes as a successful no-op.
pub struct SimpleCommand {
    name: String,
    body: Option<CommandBody>,
    notifier: Notifier,
}

impl SimpleCommand {
    /// Create a command executing `body` on every dispatch.
    ///
    /// # Examples
    ///
    /// ```
    /// use corekit::SimpleCommand;
    ///
    /// let command = SimpleCommand::new("start_game", |notification, _notifier| async move {
    ///     assert_eq!(notification.name(), "START");
    ///     Ok(())
    /// });
    /// assert_eq!(command.name(), "start_game");
    /// ```
    pub fn new<F, Fut>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(Notification, Notifier) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = CoreResult<()>> + Send + 'static,
    {
        let body: CommandBody =
            Box::new(move |notification, notifier| Box::pin(body(notification, notifier)));
        Self {
            name: name.into(),
            body: Some(body),
            notifier: Notifier::new(),
        }
    }

    /// Create a command that succeeds without doing anything.
    pub fn noop(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: None,
            notifier: Notifier::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[async_trait]
impl BaseCommand for SimpleCommand {
    fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    async fn execute(&self, notification: &Notification) -> CoreResult<()> {
        tracing::trace!(
            command = %self.name,
            notification = %notification.name(),
            "executing command"
        );
        match &self.body {
            Some(body) => body(notification.clone(), self.notifier.clone()).await,
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CoreError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn body_receives_notification() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let command = SimpleCommand::new("count", move |notification, _notifier| {
            let counter = Arc::clone(&counter);
            async move {
                assert_eq!(notification.name(), "TICK");
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        });

        command.execute(&Notification::new("TICK")).await.unwrap();
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn noop_succeeds() {
        let command = SimpleCommand::noop("idle");
        assert!(command.execute(&Notification::new("TICK")).await.is_ok());
    }

    #[tokio::test]
    async fn body_errors_propagate() {
        let command = SimpleCommand::new("boom", |_notification, _notifier| async {
            Err(CoreError::registrant("boom", "exploded"))
        });

        let err = command.execute(&Notification::new("TICK")).await.unwrap_err();
        assert!(matches!(err, CoreError::Registrant { .. }));
    }
}
