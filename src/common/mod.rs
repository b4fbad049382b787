pub mod color;
pub mod config;
pub mod error;

pub use color::RgbColor;
pub use config::SceneConfig;
pub use error::PhysicsError;
