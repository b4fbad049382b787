pub mod factory;
pub mod polygon;

pub use factory::{make_circle, make_closed_polygon, make_rectangle, make_star, try_make_star};
pub use polygon::Polygon;
