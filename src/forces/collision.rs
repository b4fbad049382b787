//! Collision responses as force creators.
//!
//! A [`CollisionForce`] runs SAT between its two bodies every tick and hands
//! any contact to a [`CollisionHandler`]. It remembers whether the pair was
//! already touching on the previous tick so handlers can act once per contact
//! instead of once per overlapping frame.

use tracing::trace;

use super::{ForceCreator, ForceKind};
use crate::collision::check_collision;
use crate::math::vec2::Vec2;
use crate::objects::Body;
use crate::world::{Bodies, BodyId, Scene};

/// Reacts to two bodies touching.
pub trait CollisionHandler {
    /// Called on every tick the bodies overlap. `axis` is the unit contact
    /// normal pointing from `body1` towards `body2`. `last_tick_collision` is
    /// true when the bodies were already overlapping on the previous tick;
    /// one-shot effects should only fire when it is false.
    fn handle(&mut self, last_tick_collision: bool, body1: &mut Body, body2: &mut Body, axis: Vec2);
}

impl<F> CollisionHandler for F
where
    F: FnMut(bool, &mut Body, &mut Body, Vec2),
{
    fn handle(&mut self, last_tick_collision: bool, body1: &mut Body, body2: &mut Body, axis: Vec2) {
        self(last_tick_collision, body1, body2, axis)
    }
}

/// Removes both bodies on first contact. Non-removable bodies survive.
#[derive(Debug, Clone, Copy, Default)]
pub struct DestructiveCollision;

impl CollisionHandler for DestructiveCollision {
    fn handle(&mut self, last_tick_collision: bool, body1: &mut Body, body2: &mut Body, _axis: Vec2) {
        if last_tick_collision {
            return;
        }
        body1.remove();
        body2.remove();
    }
}

/// Exchanges momentum along the contact normal with restitution `elasticity`
/// (0 fully inelastic, 1 fully elastic).
#[derive(Debug, Clone, Copy)]
pub struct PhysicsCollision {
    pub elasticity: f64,
}

impl PhysicsCollision {
    pub fn new(elasticity: f64) -> Self {
        PhysicsCollision { elasticity }
    }
}

impl CollisionHandler for PhysicsCollision {
    fn handle(&mut self, last_tick_collision: bool, body1: &mut Body, body2: &mut Body, axis: Vec2) {
        if last_tick_collision {
            return;
        }

        let mass1 = body1.mass();
        let mass2 = body2.mass();
        // Massless bodies carry no momentum to trade.
        if mass1 == 0.0 || mass2 == 0.0 {
            return;
        }
        let closing =
            (1.0 + self.elasticity) * (body2.velocity().dot(axis) - body1.velocity().dot(axis));

        match (mass1.is_infinite(), mass2.is_infinite()) {
            // Two immovable bodies cannot trade momentum.
            (true, true) => {}
            (false, true) => body1.add_impulse(axis * (mass1 * closing)),
            (true, false) => body2.add_impulse(axis * (-mass2 * closing)),
            (false, false) => {
                let reduced_mass = mass1 * mass2 / (mass1 + mass2);
                let impulse = axis * (reduced_mass * closing);
                body1.add_impulse(impulse);
                body2.add_impulse(-impulse);
            }
        }
    }
}

/// SAT check between two bodies feeding a [`CollisionHandler`].
pub struct CollisionForce {
    bodies: [BodyId; 2],
    handler: Box<dyn CollisionHandler>,
    last_tick_collision: bool,
}

impl CollisionForce {
    /// Panics if `body1 == body2`.
    pub fn new(body1: BodyId, body2: BodyId, handler: impl CollisionHandler + 'static) -> Self {
        assert!(body1 != body2, "a body cannot collide with itself");
        CollisionForce {
            bodies: [body1, body2],
            handler: Box::new(handler),
            last_tick_collision: false,
        }
    }

    /// Whether the pair overlapped on the most recent tick.
    pub fn is_colliding(&self) -> bool {
        self.last_tick_collision
    }
}

impl ForceCreator for CollisionForce {
    fn kind(&self) -> ForceKind {
        ForceKind::Collision
    }

    fn bodies(&self) -> &[BodyId] {
        &self.bodies
    }

    fn apply(&mut self, bodies: &mut Bodies) {
        let Some((body1, body2)) = bodies.pair_mut(self.bodies[0], self.bodies[1]) else {
            return;
        };

        let info = check_collision(body1, body2);
        if !info.collided {
            if self.last_tick_collision {
                trace!(bodies = ?self.bodies, "contact ended");
            }
            self.last_tick_collision = false;
            return;
        }

        if !self.last_tick_collision {
            trace!(bodies = ?self.bodies, axis = ?info.axis, depth = info.depth, "contact began");
        }
        self.handler.handle(self.last_tick_collision, body1, body2, info.axis);
        self.last_tick_collision = true;
    }
}

/// Registers `handler` to run whenever `body1` and `body2` overlap.
pub fn create_collision(
    scene: &mut Scene,
    body1: BodyId,
    body2: BodyId,
    handler: impl CollisionHandler + 'static,
) {
    scene.add_force(CollisionForce::new(body1, body2, handler));
}

pub fn create_destructive_collision(scene: &mut Scene, body1: BodyId, body2: BodyId) {
    create_collision(scene, body1, body2, DestructiveCollision);
}

pub fn create_physics_collision(scene: &mut Scene, elasticity: f64, body1: BodyId, body2: BodyId) {
    create_collision(scene, body1, body2, PhysicsCollision::new(elasticity));
}
