// Multiton core machinery
pub mod controller;
pub mod facade;
pub mod model;
pub mod registry;
pub mod view;

pub use controller::Controller;
pub use facade::Facade;
pub use model::Model;
pub use registry::CoreRegistry;
pub use view::View;
