pub mod bodies;
pub mod scene;

pub use bodies::{Bodies, BodyId};
pub use scene::Scene;
