//! Constructors for the polygon shapes bodies are usually built from.

use std::f64::consts::PI;

use super::polygon::Polygon;
use crate::common::PhysicsError;
use crate::math::vec2::Vec2;

/// Regular polygon of `points` vertices at distance `radius` from the origin.
/// The first vertex sits straight up at `(0, radius)`; the rest follow counter-clockwise.
///
/// Panics if `points < 3`.
pub fn make_closed_polygon(radius: f64, points: usize) -> Polygon {
    assert!(points >= 3, "closed polygon needs at least 3 points (got {})", points);
    let step = 2.0 * PI / points as f64;
    let vertices = (0..points)
        .map(|i| Vec2::new(0.0, radius).rotate(step * i as f64))
        .collect();
    Polygon::new(vertices)
}

/// Star with `points` tips, alternating outer and inner vertices, rotated by
/// `angle` and centred on `center`.
///
/// Panics if the radii are out of order or `points < 2`; see [`try_make_star`].
pub fn make_star(points: usize, inner_radius: f64, outer_radius: f64, center: Vec2, angle: f64) -> Polygon {
    match try_make_star(points, inner_radius, outer_radius, center, angle) {
        Ok(star) => star,
        Err(err) => panic!("{}", err),
    }
}

pub fn try_make_star(
    points: usize,
    inner_radius: f64,
    outer_radius: f64,
    center: Vec2,
    angle: f64,
) -> Result<Polygon, PhysicsError> {
    if points < 2 {
        return Err(PhysicsError::TooFewPoints { points, min: 2 });
    }
    if inner_radius > outer_radius {
        return Err(PhysicsError::InvalidStarRadii { inner: inner_radius, outer: outer_radius });
    }
    let step = 2.0 * PI / points as f64;
    let mut vertices = Vec::with_capacity(points * 2);
    for i in 0..points {
        let tip = step * i as f64;
        vertices.push(Vec2::new(0.0, outer_radius).rotate(tip));
        vertices.push(Vec2::new(0.0, inner_radius).rotate(tip + PI / points as f64));
    }
    let mut star = Polygon::try_new(vertices)?;
    star.rotate(angle, Vec2::ZERO);
    star.translate(center);
    Ok(star)
}

/// Axis-aligned rectangle spanned by two opposite corners.
///
/// Vertices are emitted as `(c2.x, c2.y), (c1.x, c2.y), (c1.x, c1.y), (c2.x, c1.y)`,
/// which winds counter-clockwise when `corner_two` is up and to the right of `corner_one`.
pub fn make_rectangle(corner_one: Vec2, corner_two: Vec2) -> Polygon {
    Polygon::new(vec![
        Vec2::new(corner_two.x, corner_two.y),
        Vec2::new(corner_one.x, corner_two.y),
        Vec2::new(corner_one.x, corner_one.y),
        Vec2::new(corner_two.x, corner_one.y),
    ])
}

/// Circle approximated by a regular polygon with `dots_per_radius * radius`
/// vertices (never fewer than 3), centred on `center`.
pub fn make_circle(radius: f64, dots_per_radius: f64, center: Vec2) -> Polygon {
    let points = ((dots_per_radius * radius).floor() as usize).max(3);
    let mut circle = make_closed_polygon(radius, points);
    circle.translate(center);
    circle
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_closed_polygon_first_vertex_up() {
        let hexagon = make_closed_polygon(2.0, 6);
        assert_eq!(hexagon.len(), 6);
        assert!(hexagon.vertices()[0].is_close(Vec2::new(0.0, 2.0), EPSILON));
        assert!(hexagon.area() > 0.0);
        assert!(hexagon.centroid().is_close(Vec2::ZERO, EPSILON));
        for v in hexagon.vertices() {
            assert!((v.magnitude() - 2.0).abs() < EPSILON);
        }
    }

    #[test]
    #[should_panic]
    fn test_closed_polygon_needs_three_points() {
        make_closed_polygon(1.0, 2);
    }

    #[test]
    fn test_star_alternates_radii() {
        let center = Vec2::new(5.0, 5.0);
        let star = make_star(5, 1.0, 3.0, center, 0.0);
        assert_eq!(star.len(), 10);
        for (i, v) in star.vertices().iter().enumerate() {
            let expected = if i % 2 == 0 { 3.0 } else { 1.0 };
            assert!((v.distance(center) - expected).abs() < EPSILON);
        }
        assert!(star.centroid().is_close(center, EPSILON));
    }

    #[test]
    fn test_star_rejects_inverted_radii() {
        let err = try_make_star(5, 4.0, 2.0, Vec2::ZERO, 0.0).unwrap_err();
        assert_eq!(err, PhysicsError::InvalidStarRadii { inner: 4.0, outer: 2.0 });
    }

    #[test]
    fn test_rectangle_vertex_order() {
        let rect = make_rectangle(Vec2::new(0.0, 0.0), Vec2::new(4.0, 2.0));
        assert_eq!(
            rect.vertices(),
            &[
                Vec2::new(4.0, 2.0),
                Vec2::new(0.0, 2.0),
                Vec2::new(0.0, 0.0),
                Vec2::new(4.0, 0.0),
            ]
        );
        assert!((rect.area() - 8.0).abs() < EPSILON);
        assert!(rect.centroid().is_close(Vec2::new(2.0, 1.0), EPSILON));
    }

    #[test]
    fn test_circle_vertex_count_scales_with_radius() {
        let small = make_circle(10.0, 2.0, Vec2::ZERO);
        let large = make_circle(20.0, 2.0, Vec2::ZERO);
        assert_eq!(small.len(), 20);
        assert_eq!(large.len(), 40);
        let tiny = make_circle(0.5, 1.0, Vec2::ZERO);
        assert_eq!(tiny.len(), 3);
    }

    #[test]
    fn test_circle_centered() {
        let center = Vec2::new(-3.0, 7.0);
        let circle = make_circle(5.0, 4.0, center);
        assert!(circle.centroid().is_close(center, EPSILON));
    }
}
