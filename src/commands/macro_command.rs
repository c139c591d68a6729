//! Composite command execution.
//!
//! A [`MacroCommand`] holds an ordered list of sub-command factories and runs
//! them in one of two modes:
//!
//! - [`ExecutionMode::Parallel`] (default): all sub-commands start together
//!   and the composite settles only once every one of them has finished,
//!   success or failure. Sibling failures never cancel each other; they are
//!   gathered into a single aggregate error.
//! - [`ExecutionMode::Sequential`]: sub-commands are instantiated and executed
//!   strictly one at a time in FIFO order; the first failure aborts the rest.

use async_trait::async_trait;
use futures::future::join_all;

use super::base_command::{BaseCommand, CommandFactory};
use crate::errors::{CoreError, CoreResult};
use crate::events::{Notification, Notifier};

/// How a [`MacroCommand`] drives its sub-commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Start all sub-commands together and settle-all.
    #[default]
    Parallel,
    /// Run sub-commands one at a time, failing fast.
    Sequential,
}

/// A command composed of an ordered list of sub-command factories.
///
/// Sub-commands inherit the composite's core binding, so a macro registered
/// with a controller fans its notification out to fully-wired commands.
pub struct MacroCommand {
    mode: ExecutionMode,
    sub_commands: Vec<CommandFactory>,
    notifier: Notifier,
}

impl MacroCommand {
    pub fn new(mode: ExecutionMode) -> Self {
        Self {
            mode,
            sub_commands: Vec::new(),
            notifier: Notifier::new(),
        }
    }

    pub fn parallel() -> Self {
        Self::new(ExecutionMode::Parallel)
    }

    pub fn sequential() -> Self {
        Self::new(ExecutionMode::Sequential)
    }

    /// Append a sub-command factory. Execution order is FIFO relative to the
    /// order of these calls, in both modes.
    pub fn add_sub_command(&mut self, factory: CommandFactory) {
        self.sub_commands.push(factory);
    }

    /// Builder-style helper to append a sub-command factory.
    #[must_use]
    pub fn with_sub_command(mut self, factory: CommandFactory) -> Self {
        self.add_sub_command(factory);
        self
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    pub fn sub_command_count(&self) -> usize {
        self.sub_commands.len()
    }

    fn instantiate(&self, factory: &CommandFactory) -> Box<dyn BaseCommand> {
        let command = factory();
        command.notifier().initialize_from(&self.notifier);
        command
    }
}

#[async_trait]
impl BaseCommand for MacroCommand {
    fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    async fn execute(&self, notification: &Notification) -> CoreResult<()> {
        match self.mode {
            ExecutionMode::Sequential => {
                // Each sub-command completes fully before the next one is
                // even instantiated.
                for factory in &self.sub_commands {
                    let command = self.instantiate(factory);
                    command.execute(notification).await?;
                }
                Ok(())
            }
            ExecutionMode::Parallel => {
                let commands: Vec<Box<dyn BaseCommand>> = self
                    .sub_commands
                    .iter()
                    .map(|factory| self.instantiate(factory))
                    .collect();
                let results = join_all(
                    commands
                        .iter()
                        .map(|command| command.execute(notification)),
                )
                .await;

                let total = results.len();
                let reasons: Vec<String> = results
                    .into_iter()
                    .filter_map(|result| result.err())
                    .map(|err| err.to_string())
                    .collect();

                if reasons.is_empty() {
                    Ok(())
                } else {
                    tracing::debug!(
                        failed = reasons.len(),
                        total,
                        "parallel macro command had sub-command failures"
                    );
                    Err(CoreError::SubCommandsFailed {
                        failed: reasons.len(),
                        total,
                        reasons,
                    })
                }
            }
        }
    }
}
