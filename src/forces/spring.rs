use super::{ForceCreator, ForceKind};
use crate::world::{Bodies, BodyId, Scene};

/// Hooke's-law spring of constant `k` with zero rest length between two centroids.
pub struct Spring {
    pub k: f64,
    bodies: [BodyId; 2],
}

impl Spring {
    /// Panics if `body1 == body2`.
    pub fn new(k: f64, body1: BodyId, body2: BodyId) -> Self {
        assert!(body1 != body2, "a spring needs two distinct bodies");
        Spring {
            k,
            bodies: [body1, body2],
        }
    }
}

impl ForceCreator for Spring {
    fn kind(&self) -> ForceKind {
        ForceKind::Spring
    }

    fn bodies(&self) -> &[BodyId] {
        &self.bodies
    }

    fn apply(&mut self, bodies: &mut Bodies) {
        let Some((body1, body2)) = bodies.pair_mut(self.bodies[0], self.bodies[1]) else {
            return;
        };
        let stretch = body2.centroid() - body1.centroid();
        let restoring = stretch * -self.k;
        body1.add_force(-restoring);
        body2.add_force(restoring);
    }
}

pub fn create_spring(scene: &mut Scene, k: f64, body1: BodyId, body2: BodyId) {
    scene.add_force(Spring::new(k, body1, body2));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RgbColor;
    use crate::math::vec2::Vec2;
    use crate::objects::Body;
    use crate::shapes::make_rectangle;

    #[test]
    fn test_spring_pulls_bodies_together() {
        let mut bodies = Bodies::with_capacity(2);
        let half = Vec2::new(0.5, 0.5);
        let anchor = bodies.insert(Body::new(
            make_rectangle(-half, half),
            f64::INFINITY,
            RgbColor::BLACK,
        ));
        let weight = Vec2::new(4.0, -2.0);
        let mass = bodies.insert(Body::new(
            make_rectangle(weight - half, weight + half),
            1.0,
            RgbColor::BLACK,
        ));

        let mut spring = Spring::new(0.5, anchor, mass);
        spring.apply(&mut bodies);
        assert!(bodies.get(mass).unwrap().force().is_close(Vec2::new(-2.0, 1.0), 1e-12));
        assert!(bodies.get(anchor).unwrap().force().is_close(Vec2::new(2.0, -1.0), 1e-12));
    }

    #[test]
    #[should_panic(expected = "two distinct bodies")]
    fn test_spring_to_itself_panics() {
        let mut bodies = Bodies::with_capacity(1);
        let id = bodies.insert(Body::new(
            make_rectangle(Vec2::ZERO, Vec2::new(1.0, 1.0)),
            1.0,
            RgbColor::BLACK,
        ));
        Spring::new(1.0, id, id);
    }
}
