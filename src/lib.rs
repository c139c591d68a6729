//! corekit: a multiton application-core substrate.
//!
//! Each core binds named data proxies, named view mediators, and named
//! commands together through a publish/subscribe notification bus, letting
//! independently-implemented units communicate without direct references.
//! Multiple cores coexist under distinct string keys inside an explicit
//! [`CoreRegistry`]; there is no ambient global state.

pub mod commands;
pub mod core;
pub mod errors;
pub mod events;
pub mod mediators;
pub mod proxies;

// Re-export key types for easier access
pub use commands::{
    command_factory, BaseCommand, CommandFactory, ExecutionMode, MacroCommand, SimpleCommand,
};
pub use self::core::{Controller, CoreRegistry, Facade, Model, View};
pub use errors::{BoxError, CoreError, CoreResult};
pub use events::{ContextId, Notification, Notifier, Observer};
pub use mediators::BaseMediator;
pub use proxies::BaseProxy;
