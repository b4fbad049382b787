pub mod detection;
pub mod manifold;

// Re-export key types
pub use detection::{check_collision, find_collision, project_polygon};
pub use manifold::CollisionInfo;
