//! A small 2D rigid-body kernel for frame-stepped games and toys.
//!
//! Bodies are convex polygons integrated with a trapezoidal step. Overlap is
//! found with the separating axis theorem, and every interaction (gravity,
//! springs, drag, collision responses) is a [`ForceCreator`] registered with a
//! [`Scene`], which runs them once per [`Scene::tick`].
//!
//! ```
//! use polyphys::{forces, make_rectangle, Body, RgbColor, Scene, Vec2};
//!
//! let mut scene = Scene::new();
//! let ball = scene.add_body(Body::new(
//!     make_rectangle(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0)),
//!     1.0,
//!     RgbColor::WHITE,
//! ));
//! forces::create_earth_gravity(&mut scene, 9.8, ball);
//! scene.tick(0.01);
//! assert!(scene.body(ball).unwrap().velocity().y < 0.0);
//! ```

pub mod collision;
pub mod common;
pub mod forces;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{check_collision, find_collision, CollisionInfo};
pub use common::{PhysicsError, RgbColor, SceneConfig};
pub use forces::{CollisionHandler, FnForce, ForceApplier, ForceCreator, ForceKind};
pub use math::vec2::Vec2;
pub use objects::{Body, BodyInfo, BodyKind};
pub use shapes::{make_circle, make_closed_polygon, make_rectangle, make_star, Polygon};
pub use world::{Bodies, BodyId, Scene};
