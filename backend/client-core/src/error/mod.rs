pub mod config;
pub mod controller;
pub mod fetch;
pub mod render;

pub use config::ConfigError;
pub use controller::ControllerError;
pub use fetch::FetchError;
pub use render::RenderError;
