// Command execution model
pub mod base_command;
pub mod macro_command;
pub mod simple_command;

pub use base_command::{command_factory, BaseCommand, CommandFactory};
pub use macro_command::{ExecutionMode, MacroCommand};
pub use simple_command::SimpleCommand;
