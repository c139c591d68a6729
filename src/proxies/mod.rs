pub mod base_proxy;

pub use base_proxy::BaseProxy;
