use crate::common::PhysicsError;
use crate::math::vec2::Vec2;

/// A closed polygon given by its vertices in world space.
///
/// Vertices should be ordered counter-clockwise; area and centroid are signed
/// accordingly. Edges run between consecutive vertices and from the last
/// vertex back to the first. `translate`, `rotate` and the `dilate_*` family
/// mutate the vertices in place; clone the polygon to keep a stable copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    /// Creates a new polygon from a vector of vertices.
    ///
    /// Panics if fewer than 3 vertices are provided.
    pub fn new(vertices: Vec<Vec2>) -> Self {
        match Self::try_new(vertices) {
            Ok(polygon) => polygon,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn try_new(vertices: Vec<Vec2>) -> Result<Self, PhysicsError> {
        if vertices.len() < 3 {
            return Err(PhysicsError::TooFewVertices { count: vertices.len() });
        }
        Ok(Polygon { vertices })
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false for a constructed polygon; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates the edges as `(start, end)` pairs, beginning with the closing
    /// edge from the last vertex to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let last = self.vertices[self.vertices.len() - 1];
        std::iter::once(last)
            .chain(self.vertices.iter().copied())
            .zip(self.vertices.iter().copied())
    }

    /// Signed area by the shoelace formula. Positive for counter-clockwise winding.
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        let mut total = 0.0;
        for i in 0..n {
            total += self.vertices[i].cross(self.vertices[(i + 1) % n]);
        }
        total / 2.0
    }

    /// Area-weighted centroid.
    ///
    /// Zero-area polygons divide by zero and yield non-finite components.
    pub fn centroid(&self) -> Vec2 {
        let n = self.vertices.len();
        let mut weighted = Vec2::ZERO;
        for i in 0..n {
            let v1 = self.vertices[i];
            let v2 = self.vertices[(i + 1) % n];
            weighted += (v1 + v2) * v1.cross(v2);
        }
        weighted * (1.0 / (6.0 * self.area()))
    }

    pub fn translate(&mut self, translation: Vec2) {
        for v in &mut self.vertices {
            *v += translation;
        }
    }

    /// Rotates every vertex by `angle` radians (counter-clockwise positive) about `pivot`.
    pub fn rotate(&mut self, angle: f64, pivot: Vec2) {
        for v in &mut self.vertices {
            *v = (*v - pivot).rotate(angle) + pivot;
        }
    }

    /// Scales x components by `factor` about the origin.
    pub fn dilate_x(&mut self, factor: f64) {
        for v in &mut self.vertices {
            v.x *= factor;
        }
    }

    /// Scales y components by `factor` about the origin.
    pub fn dilate_y(&mut self, factor: f64) {
        for v in &mut self.vertices {
            v.y *= factor;
        }
    }

    pub fn dilate(&mut self, factor: f64) {
        self.dilate_x(factor);
        self.dilate_y(factor);
    }

    /// Unit axes perpendicular to each edge, in [`Polygon::edges`] order.
    /// For counter-clockwise winding these point inward.
    pub fn edge_normals(&self) -> Vec<Vec2> {
        self.edges()
            .map(|(from, to)| Vec2::perpendicular_unit_axis(from, to))
            .collect()
    }

    /// Projects every vertex onto `axis` and returns the `(min, max)` interval.
    pub fn project(&self, axis: Vec2) -> (f64, f64) {
        let mut min_proj = f64::INFINITY;
        let mut max_proj = f64::NEG_INFINITY;
        for v in &self.vertices {
            let projection = v.dot(axis);
            min_proj = min_proj.min(projection);
            max_proj = max_proj.max(projection);
        }
        (min_proj, max_proj)
    }
}
