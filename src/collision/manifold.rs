use crate::math::vec2::Vec2;

/// Result of a collision test between two shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionInfo {
    /// Whether the shapes overlap (touching counts).
    pub collided: bool,
    /// Unit axis of least penetration, pointing from shape A towards shape B.
    /// Zero when the shapes do not collide.
    pub axis: Vec2,
    /// Overlap of the two projections along `axis`. Zero when merely touching
    /// or not colliding.
    pub depth: f64,
}

impl CollisionInfo {
    pub const NONE: CollisionInfo = CollisionInfo {
        collided: false,
        axis: Vec2::ZERO,
        depth: 0.0,
    };
}

impl Default for CollisionInfo {
    fn default() -> Self {
        Self::NONE
    }
}
