use super::manifold::CollisionInfo;
use crate::math::vec2::Vec2;
use crate::objects::Body;
use crate::shapes::Polygon;

// --- Projection Helper for SAT ---

/// Projects a polygon onto a given axis and returns the min/max interval.
pub fn project_polygon(shape: &Polygon, axis: Vec2) -> (f64, f64) {
    shape.project(axis)
}

/// Overlap of the two shapes' projections onto `axis`, or `None` if the axis
/// separates them. Intervals that only touch overlap by zero.
fn axis_overlap(shape_a: &Polygon, shape_b: &Polygon, axis: Vec2) -> Option<f64> {
    let (min_a, max_a) = project_polygon(shape_a, axis);
    let (min_b, max_b) = project_polygon(shape_b, axis);
    if max_a < min_b || max_b < min_a {
        return None;
    }
    Some((max_a - min_b).min(max_b - min_a))
}

/// Separating Axis Theorem test between two convex polygons.
///
/// Every edge normal of `shape_a` and then of `shape_b` is tried in edge order.
/// The first axis that separates the projections proves the shapes disjoint.
/// Otherwise the reported axis is the one with the smallest overlap; on exact
/// ties the first one found wins. The axis is flipped if needed so it points
/// from `shape_a` towards `shape_b`.
///
/// Concave input gives unreliable answers.
pub fn find_collision(shape_a: &Polygon, shape_b: &Polygon) -> CollisionInfo {
    let mut best: Option<(f64, Vec2)> = None;

    for axis in shape_a.edge_normals().into_iter().chain(shape_b.edge_normals()) {
        // Zero-length edges have no normal.
        if !(axis.x.is_finite() && axis.y.is_finite()) {
            continue;
        }

        let overlap = match axis_overlap(shape_a, shape_b, axis) {
            Some(overlap) => overlap,
            None => return CollisionInfo::NONE,
        };

        let is_better = match best {
            Some((min_overlap, _)) => overlap < min_overlap,
            None => true,
        };
        if is_better {
            best = Some((overlap, axis));
        }
    }

    let Some((depth, mut axis)) = best else {
        return CollisionInfo::NONE;
    };

    let center_to_center = shape_b.centroid() - shape_a.centroid();
    if center_to_center.dot(axis) < 0.0 {
        axis = -axis;
    }

    CollisionInfo {
        collided: true,
        axis,
        depth,
    }
}

/// Runs [`find_collision`] on the current shapes of two bodies.
pub fn check_collision(body_a: &Body, body_b: &Body) -> CollisionInfo {
    find_collision(&body_a.shape, &body_b.shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{make_rectangle, Polygon};
    use std::f64::consts::PI;
    const EPSILON: f64 = 1e-9;

    fn square(center: Vec2, side: f64) -> Polygon {
        let half = Vec2::new(side / 2.0, side / 2.0);
        make_rectangle(center - half, center + half)
    }

    #[test]
    fn test_squares_apart_do_not_collide() {
        let a = square(Vec2::new(0.0, 0.0), 2.0);
        let b = square(Vec2::new(3.0, 0.0), 2.0);
        let info = find_collision(&a, &b);
        assert!(!info.collided);
        assert_eq!(info.axis, Vec2::ZERO);
    }

    #[test]
    fn test_overlapping_squares_collide_along_x() {
        let a = square(Vec2::new(0.0, 0.0), 2.0);
        let b = square(Vec2::new(1.0, 0.0), 2.0);
        let info = find_collision(&a, &b);
        assert!(info.collided);
        assert!(info.axis.is_close(Vec2::new(1.0, 0.0), EPSILON));
        assert!((info.depth - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_axis_points_from_a_to_b() {
        let a = square(Vec2::new(0.0, 0.0), 2.0);
        let b = square(Vec2::new(-1.0, 0.0), 2.0);
        let info = find_collision(&a, &b);
        assert!(info.axis.is_close(Vec2::new(-1.0, 0.0), EPSILON));

        let above = square(Vec2::new(0.2, 1.5), 2.0);
        let info = find_collision(&a, &above);
        assert!(info.collided);
        assert!(info.axis.is_close(Vec2::new(0.0, 1.0), EPSILON));
        let info = find_collision(&above, &a);
        assert!(info.axis.is_close(Vec2::new(0.0, -1.0), EPSILON));
    }

    #[test]
    fn test_touching_counts_as_collision() {
        let a = square(Vec2::new(0.0, 0.0), 2.0);
        let b = square(Vec2::new(2.0, 0.0), 2.0);
        let info = find_collision(&a, &b);
        assert!(info.collided);
        assert_eq!(info.depth, 0.0);
        assert!(info.axis.is_close(Vec2::new(1.0, 0.0), EPSILON));
    }

    #[test]
    fn test_tie_keeps_first_axis() {
        // Equal overlap on x and y: the first axis in A's edge order wins.
        let a = square(Vec2::new(0.0, 0.0), 2.0);
        let b = square(Vec2::new(1.0, 1.0), 2.0);
        let info = find_collision(&a, &b);
        assert!(info.collided);
        let first = a.edge_normals()[0];
        assert!((info.axis.dot(first).abs() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_rotated_square_separated_diagonally() {
        // AABBs overlap but a diamond's edge separates them.
        let a = square(Vec2::new(0.0, 0.0), 2.0);
        let mut diamond = square(Vec2::new(2.3, 2.3), 2.0);
        let c = diamond.centroid();
        diamond.rotate(PI / 4.0, c);
        assert!(!find_collision(&a, &diamond).collided);
    }

    #[test]
    fn test_contained_shape_collides() {
        let outer = square(Vec2::new(0.0, 0.0), 10.0);
        let inner = square(Vec2::new(1.0, 0.5), 1.0);
        let info = find_collision(&outer, &inner);
        assert!(info.collided);
        assert!((info.axis.magnitude() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_project_polygon() {
        let a = square(Vec2::new(0.0, 0.0), 2.0);
        assert_eq!(project_polygon(&a, Vec2::new(1.0, 0.0)), (-1.0, 1.0));
    }
}
