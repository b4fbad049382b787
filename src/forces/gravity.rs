use super::{ForceCreator, ForceKind};
use crate::math::vec2::Vec2;
use crate::world::{Bodies, BodyId, Scene};

/// Uniform downward pull of strength `g` on a single body.
pub struct EarthGravity {
    pub g: f64,
    body: [BodyId; 1],
}

impl EarthGravity {
    pub fn new(g: f64, body: BodyId) -> Self {
        EarthGravity { g, body: [body] }
    }
}

impl ForceCreator for EarthGravity {
    fn kind(&self) -> ForceKind {
        ForceKind::EarthGravity
    }

    fn bodies(&self) -> &[BodyId] {
        &self.body
    }

    fn apply(&mut self, bodies: &mut Bodies) {
        let Some(body) = bodies.get_mut(self.body[0]) else {
            return;
        };
        let weight = Vec2::new(0.0, -body.mass() * self.g);
        body.add_force(weight);
    }
}

/// Mutual attraction `G * m1 * m2 / d^2` along the line between two centroids.
///
/// Nothing is applied while the centroids are closer than `min_distance`.
pub struct NewtonianGravity {
    pub big_g: f64,
    pub min_distance: f64,
    bodies: [BodyId; 2],
}

impl NewtonianGravity {
    /// Panics if `body1 == body2`.
    pub fn new(big_g: f64, min_distance: f64, body1: BodyId, body2: BodyId) -> Self {
        assert!(body1 != body2, "gravity needs two distinct bodies");
        NewtonianGravity {
            big_g,
            min_distance,
            bodies: [body1, body2],
        }
    }
}

impl ForceCreator for NewtonianGravity {
    fn kind(&self) -> ForceKind {
        ForceKind::NewtonianGravity
    }

    fn bodies(&self) -> &[BodyId] {
        &self.bodies
    }

    fn apply(&mut self, bodies: &mut Bodies) {
        let Some((body1, body2)) = bodies.pair_mut(self.bodies[0], self.bodies[1]) else {
            return;
        };
        let offset = body1.centroid() - body2.centroid();
        let distance = offset.magnitude();
        if distance < self.min_distance {
            return;
        }

        let magnitude = self.big_g * body1.mass() * body2.mass() / (distance * distance);
        let force = offset.unit() * magnitude;
        body1.add_force(-force);
        body2.add_force(force);
    }
}

/// Registers Earth-style gravity on `body`.
pub fn create_earth_gravity(scene: &mut Scene, g: f64, body: BodyId) {
    scene.add_force(EarthGravity::new(g, body));
}

/// Registers Newtonian attraction between two bodies, using the scene's
/// configured minimum distance.
pub fn create_newtonian_gravity(scene: &mut Scene, big_g: f64, body1: BodyId, body2: BodyId) {
    let min_distance = scene.config().newtonian_min_distance;
    scene.add_force(NewtonianGravity::new(big_g, min_distance, body1, body2));
}
