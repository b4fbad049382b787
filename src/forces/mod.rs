//! Force and impulse registry.
//!
//! A [`ForceCreator`] is one instance of a physical law (a spring between two
//! bodies, gravity on one body, a collision response for a pair) together with
//! the bodies it acts on. Creators of the same [`ForceKind`] share a single
//! [`ForceApplier`], which the scene runs once per tick.

use tracing::trace;

use crate::world::{Bodies, BodyId};

pub mod collision;
pub mod drag;
pub mod gravity;
pub mod spring;

pub use collision::{
    create_collision, create_destructive_collision, create_physics_collision, CollisionForce,
    CollisionHandler, DestructiveCollision, PhysicsCollision,
};
pub use drag::{create_drag, Drag};
pub use gravity::{create_earth_gravity, create_newtonian_gravity, EarthGravity, NewtonianGravity};
pub use spring::{create_spring, Spring};

/// Identifies a physical law. Registrations with the same kind share an applier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForceKind {
    EarthGravity,
    NewtonianGravity,
    Spring,
    Drag,
    Collision,
    /// User-defined laws, keyed by name.
    Custom(&'static str),
}

/// One parameterised instance of a force law.
pub trait ForceCreator {
    fn kind(&self) -> ForceKind;

    /// The bodies this instance acts on, in the order it expects them.
    fn bodies(&self) -> &[BodyId];

    /// Accumulates forces or impulses on the referenced bodies, or removes them.
    fn apply(&mut self, bodies: &mut Bodies);

    /// True once any referenced body is gone or marked removed.
    fn is_stale(&self, bodies: &Bodies) -> bool {
        self.bodies().iter().any(|&id| bodies.is_removed(id))
    }
}

/// All registered instances of one force kind.
pub struct ForceApplier {
    kind: ForceKind,
    bundles: Vec<Box<dyn ForceCreator>>,
}

impl ForceApplier {
    pub fn new(kind: ForceKind, capacity: usize) -> Self {
        ForceApplier {
            kind,
            bundles: Vec::with_capacity(capacity),
        }
    }

    pub fn kind(&self) -> ForceKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    /// Panics if `index` is out of range.
    pub fn bundle(&self, index: usize) -> &dyn ForceCreator {
        self.bundles[index].as_ref()
    }

    /// Panics if the creator's kind differs from this applier's.
    pub fn add_bundle(&mut self, creator: Box<dyn ForceCreator>) {
        assert_eq!(
            creator.kind(),
            self.kind,
            "bundle kind does not match its applier"
        );
        self.bundles.push(creator);
    }

    /// Removes and returns the bundle at `index`. Panics if out of range.
    pub fn remove_bundle(&mut self, index: usize) -> Box<dyn ForceCreator> {
        self.bundles.remove(index)
    }

    /// Runs every bundle, newest first. A bundle whose bodies were removed,
    /// possibly by a bundle run earlier in this same pass, is dropped unrun.
    pub fn apply(&mut self, bodies: &mut Bodies) {
        for i in (0..self.bundles.len()).rev() {
            if self.bundles[i].is_stale(bodies) {
                trace!(kind = ?self.kind, "dropping bundle with a removed body");
                self.bundles.remove(i);
            } else {
                self.bundles[i].apply(bodies);
            }
        }
    }

    /// Drops every bundle that references a removed body. Returns how many went.
    pub fn prune(&mut self, bodies: &Bodies) -> usize {
        let before = self.bundles.len();
        self.bundles.retain(|bundle| !bundle.is_stale(bodies));
        before - self.bundles.len()
    }
}

/// A force law given as a closure over the referenced bodies.
pub struct FnForce<F> {
    kind: ForceKind,
    bodies: Vec<BodyId>,
    func: F,
}

impl<F> FnForce<F>
where
    F: FnMut(&mut Bodies, &[BodyId]),
{
    pub fn new(kind: ForceKind, bodies: Vec<BodyId>, func: F) -> Self {
        FnForce { kind, bodies, func }
    }
}

impl<F> ForceCreator for FnForce<F>
where
    F: FnMut(&mut Bodies, &[BodyId]),
{
    fn kind(&self) -> ForceKind {
        self.kind
    }

    fn bodies(&self) -> &[BodyId] {
        &self.bodies
    }

    fn apply(&mut self, bodies: &mut Bodies) {
        (self.func)(bodies, &self.bodies);
    }
}
