pub mod base_mediator;

pub use base_mediator::BaseMediator;
