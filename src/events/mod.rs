// Notification bus primitives
pub mod notification;
pub mod notifier;
pub mod observer;

pub use notification::Notification;
pub use notifier::Notifier;
pub use observer::{ContextId, NotifyMethod, Observer, ObserverFuture};
