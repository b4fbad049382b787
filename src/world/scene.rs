use std::ops::{Index, IndexMut};

use tracing::{debug, trace};

use super::bodies::{Bodies, BodyId};
use crate::common::{PhysicsError, SceneConfig};
use crate::forces::{FnForce, ForceApplier, ForceCreator, ForceKind};
use crate::math::vec2::Vec2;
use crate::objects::Body;
use crate::shapes::{make_circle, Polygon};

/// Owns every body and every registered force, and steps them together.
pub struct Scene {
    config: SceneConfig,
    bodies: Bodies,
    appliers: Vec<ForceApplier>,
}

impl Scene {
    /// Creates an empty scene with default settings.
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    /// Panics if `config` does not validate. See [`Scene::try_with_config`].
    pub fn with_config(config: SceneConfig) -> Self {
        match Self::try_with_config(config) {
            Ok(scene) => scene,
            Err(err) => panic!("invalid scene config: {}", err),
        }
    }

    pub fn try_with_config(config: SceneConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        Ok(Self {
            config,
            bodies: Bodies::with_capacity(config.body_capacity),
            appliers: Vec::with_capacity(config.applier_capacity),
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Adds a body to the end of the body list and returns its handle.
    pub fn add_body(&mut self, body: Body) -> BodyId {
        self.bodies.insert(body)
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id)
    }

    pub fn bodies(&self) -> &Bodies {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut Bodies {
        &mut self.bodies
    }

    /// Number of bodies, including any marked removed but not yet purged.
    pub fn bodies_count(&self) -> usize {
        self.bodies.len()
    }

    /// Handle of the `index`-th body. Panics if out of range.
    pub fn body_id(&self, index: usize) -> BodyId {
        match self.bodies.id_at(index) {
            Some(id) => id,
            None => panic!("body index {} out of bounds (count: {})", index, self.bodies_count()),
        }
    }

    /// The `index`-th body in insertion order. Panics if out of range.
    pub fn get_body(&self, index: usize) -> &Body {
        let id = self.body_id(index);
        &self.bodies[id]
    }

    /// Panics if out of range.
    pub fn get_body_mut(&mut self, index: usize) -> &mut Body {
        let id = self.body_id(index);
        &mut self.bodies[id]
    }

    pub fn try_get_body(&self, index: usize) -> Result<&Body, PhysicsError> {
        let id = self.bodies.id_at(index).ok_or(PhysicsError::BodyOutOfBounds {
            index,
            count: self.bodies_count(),
        })?;
        self.bodies.get(id).ok_or(PhysicsError::StaleBody)
    }

    /// Marks the `index`-th body removed; it is purged on the next tick.
    /// Non-removable bodies are left alone. Panics if out of range.
    pub fn remove_body(&mut self, index: usize) {
        self.get_body_mut(index).remove();
    }

    /// A polygonal circle at this scene's configured vertex density.
    pub fn make_circle(&self, radius: f64, center: Vec2) -> Polygon {
        make_circle(radius, self.config.circle_dots_per_radius, center)
    }

    /// Registers a force creator, sharing the applier of any earlier
    /// registration of the same kind.
    pub fn add_force(&mut self, creator: impl ForceCreator + 'static) {
        self.add_boxed_force(Box::new(creator));
    }

    pub fn add_boxed_force(&mut self, creator: Box<dyn ForceCreator>) {
        let kind = creator.kind();
        let index = match self.appliers.iter().position(|applier| applier.kind() == kind) {
            Some(index) => index,
            None => {
                debug!(?kind, "new force applier");
                self.appliers.push(ForceApplier::new(kind, self.config.bundle_capacity));
                self.appliers.len() - 1
            }
        };
        self.appliers[index].add_bundle(creator);
    }

    /// Registers a closure acting on a single body.
    pub fn add_force_creator<F>(&mut self, kind: ForceKind, body: BodyId, mut func: F)
    where
        F: FnMut(&mut Body) + 'static,
    {
        self.add_force(FnForce::new(kind, vec![body], move |bodies: &mut Bodies, ids: &[BodyId]| {
            if let Some(body) = bodies.get_mut(ids[0]) {
                func(body);
            }
        }));
    }

    /// Registers a closure acting on several bodies, handed back in the same order.
    pub fn add_bodies_force_creator<F>(&mut self, kind: ForceKind, bodies: Vec<BodyId>, func: F)
    where
        F: FnMut(&mut Bodies, &[BodyId]) + 'static,
    {
        self.add_force(FnForce::new(kind, bodies, func));
    }

    pub fn appliers(&self) -> &[ForceApplier] {
        &self.appliers
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// Forces run first, newest applier first and newest bundle first within
    /// each applier. Bundles
    /// whose bodies were removed, before or during that pass, are then
    /// dropped. Finally removed bodies are purged and the rest integrated, so
    /// a body is never integrated on the tick it goes away.
    pub fn tick(&mut self, dt: f64) {
        trace!(dt, bodies = self.bodies.len(), "tick");

        for applier in self.appliers.iter_mut().rev() {
            applier.apply(&mut self.bodies);
        }

        let mut pruned = 0;
        for applier in &mut self.appliers {
            pruned += applier.prune(&self.bodies);
        }
        if pruned > 0 {
            trace!(pruned, "dropped bundles of removed bodies");
        }

        let purged = self.bodies.integrate_and_purge(dt);
        if purged > 0 {
            debug!(purged, remaining = self.bodies.len(), "purged removed bodies");
        }
    }
}

impl Index<BodyId> for Scene {
    type Output = Body;

    fn index(&self, id: BodyId) -> &Body {
        &self.bodies[id]
    }
}

impl IndexMut<BodyId> for Scene {
    fn index_mut(&mut self, id: BodyId) -> &mut Body {
        &mut self.bodies[id]
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RgbColor;
    use crate::objects::{BodyInfo, BodyKind};
    use crate::shapes::make_rectangle;
    use std::cell::Cell;
    use std::rc::Rc;

    fn square_at(center: Vec2, mass: f64) -> Body {
        let half = Vec2::new(1.0, 1.0);
        Body::new(make_rectangle(center - half, center + half), mass, RgbColor::BLACK)
    }

    #[test]
    fn test_add_and_index_bodies() {
        let mut scene = Scene::new();
        let a = scene.add_body(square_at(Vec2::new(1.0, 0.0), 1.0));
        let b = scene.add_body(square_at(Vec2::new(2.0, 0.0), 1.0));
        assert_eq!(scene.bodies_count(), 2);
        assert_eq!(scene.body_id(0), a);
        assert_eq!(scene.body_id(1), b);
        assert_eq!(scene.get_body(1).centroid(), Vec2::new(2.0, 0.0));
        assert!(scene.body(a).is_some());
    }

    #[test]
    #[should_panic]
    fn test_get_body_out_of_range_panics() {
        let scene = Scene::new();
        scene.get_body(0);
    }

    #[test]
    fn test_try_get_body_reports_bounds() {
        let mut scene = Scene::new();
        scene.add_body(square_at(Vec2::ZERO, 1.0));
        assert!(scene.try_get_body(0).is_ok());
        assert_eq!(
            scene.try_get_body(3).unwrap_err(),
            PhysicsError::BodyOutOfBounds { index: 3, count: 1 }
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SceneConfig::new().with_bundle_capacity(0);
        assert_eq!(
            Scene::try_with_config(config).err(),
            Some(PhysicsError::ZeroCapacity("bundle"))
        );
    }

    #[test]
    fn test_forces_of_same_kind_share_an_applier() {
        let mut scene = Scene::new();
        let a = scene.add_body(square_at(Vec2::ZERO, 1.0));
        let b = scene.add_body(square_at(Vec2::new(10.0, 0.0), 1.0));
        scene.add_force_creator(ForceKind::Custom("push"), a, |_| {});
        scene.add_force_creator(ForceKind::Custom("push"), b, |_| {});
        scene.add_force_creator(ForceKind::Custom("pull"), b, |_| {});

        assert_eq!(scene.appliers().len(), 2);
        assert_eq!(scene.appliers()[0].kind(), ForceKind::Custom("push"));
        assert_eq!(scene.appliers()[0].len(), 2);
        assert_eq!(scene.appliers()[1].len(), 1);
    }

    #[test]
    fn test_tick_applies_force_then_integrates() {
        let mut scene = Scene::new();
        let id = scene.add_body(square_at(Vec2::ZERO, 2.0));
        scene.add_force_creator(ForceKind::Custom("push"), id, |body| {
            body.add_force(Vec2::new(4.0, 0.0));
        });

        scene.tick(1.0);
        let body = scene.body(id).unwrap();
        assert_eq!(body.velocity(), Vec2::new(2.0, 0.0));
        assert_eq!(body.centroid(), Vec2::new(1.0, 0.0));
        assert_eq!(body.force(), Vec2::ZERO);
    }

    #[test]
    fn test_removed_body_is_purged_and_not_integrated() {
        let released = Rc::new(Cell::new(false));
        let flag = Rc::clone(&released);
        let mut scene = Scene::new();
        let keep = scene.add_body(square_at(Vec2::ZERO, 1.0));
        let shape = make_rectangle(Vec2::new(5.0, 5.0), Vec2::new(6.0, 6.0));
        let gone = scene.add_body(
            Body::with_info(shape, 1.0, RgbColor::BLACK, BodyInfo::from(BodyKind::Brick))
                .with_release_hook(move |_| flag.set(true)),
        );

        scene.remove_body(1);
        scene.remove_body(1);
        assert_eq!(scene.bodies_count(), 2);
        scene.tick(0.1);

        assert!(released.get());
        assert_eq!(scene.bodies_count(), 1);
        assert!(scene.body(gone).is_none());
        assert_eq!(scene.body_id(0), keep);
    }

    #[test]
    fn test_non_removable_body_survives_remove() {
        let mut scene = Scene::new();
        let mut wall = square_at(Vec2::ZERO, f64::INFINITY);
        wall.set_removability(false);
        scene.add_body(wall);
        scene.remove_body(0);
        scene.tick(0.1);
        assert_eq!(scene.bodies_count(), 1);
    }

    #[test]
    fn test_bundles_of_removed_bodies_dropped_same_tick() {
        let calls = Rc::new(Cell::new(0));
        let mut scene = Scene::new();
        let a = scene.add_body(square_at(Vec2::ZERO, 1.0));
        let b = scene.add_body(square_at(Vec2::new(10.0, 0.0), 1.0));

        // Appliers run newest first: "remove" takes `b` out before the older
        // "count" applier gets to it, so the counter never runs.
        let counter = Rc::clone(&calls);
        scene.add_bodies_force_creator(ForceKind::Custom("count"), vec![a, b], move |_, _| {
            counter.set(counter.get() + 1);
        });
        scene.add_force_creator(ForceKind::Custom("remove"), b, |body| body.remove());

        scene.tick(0.1);
        assert_eq!(calls.get(), 0);
        assert!(scene.appliers().iter().all(ForceApplier::is_empty));
        assert_eq!(scene.bodies_count(), 1);

        scene.tick(0.1);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_make_circle_uses_config_density() {
        let scene = Scene::with_config(SceneConfig::new().with_circle_dots_per_radius(2.0));
        assert_eq!(scene.make_circle(5.0, Vec2::ZERO).len(), 10);
    }
}
