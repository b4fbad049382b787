use std::fmt;

use super::info::{BodyInfo, ReleaseHook};
use crate::common::RgbColor;
use crate::integration::integrator;
use crate::math::vec2::Vec2;
use crate::shapes::Polygon;

/// A rigid polygonal body.
///
/// The body owns its shape in world coordinates and keeps `centroid` equal to
/// the shape's geometric centroid: every mutator that moves the shape moves
/// both together. Mass is either positive and finite, `0.0` (driven purely by
/// its velocity) or `f64::INFINITY` (immovable, e.g. walls).
pub struct Body {
    // Geometry
    pub(crate) shape: Polygon,
    pub(crate) color: RgbColor,

    // Primary state
    pub(crate) mass: f64,
    pub(crate) centroid: Vec2,
    pub(crate) rotation: f64,
    pub(crate) velocity: Vec2,
    pub(crate) angular_velocity: f64,
    pub(crate) acceleration: Vec2,

    // Accumulators, cleared at the end of every tick
    pub(crate) force: Vec2,
    pub(crate) impulse: Vec2,

    info: Option<BodyInfo>,
    release_hook: Option<ReleaseHook>,
    removable: bool,
    removed: bool,
}

impl Body {
    /// Creates a body at rest whose centroid is that of `shape`.
    ///
    /// Panics if `mass` is negative or NaN.
    pub fn new(shape: Polygon, mass: f64, color: RgbColor) -> Self {
        assert!(mass >= 0.0, "body mass must be non-negative (got {})", mass);
        let centroid = shape.centroid();
        Self {
            shape,
            color,
            mass,
            centroid,
            rotation: 0.0,
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            acceleration: Vec2::ZERO,
            force: Vec2::ZERO,
            impulse: Vec2::ZERO,
            info: None,
            release_hook: None,
            removable: true,
            removed: false,
        }
    }

    pub fn with_info(shape: Polygon, mass: f64, color: RgbColor, info: BodyInfo) -> Self {
        let mut body = Self::new(shape, mass, color);
        body.info = Some(info);
        body
    }

    /// Registers `hook` to run with the body's info when the body is destroyed.
    ///
    /// Panics if the body carries no info; build it with [`Body::with_info`].
    pub fn with_release_hook(mut self, hook: impl FnOnce(BodyInfo) + 'static) -> Self {
        assert!(self.info.is_some(), "release hook needs a body with info");
        self.release_hook = Some(Box::new(hook));
        self
    }

    /// An independent copy of the current shape.
    pub fn shape(&self) -> Polygon {
        self.shape.clone()
    }

    pub fn vertices(&self) -> &[Vec2] {
        self.shape.vertices()
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn color(&self) -> RgbColor {
        self.color
    }

    pub fn centroid(&self) -> Vec2 {
        self.centroid
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    /// Acceleration from the force applied during the last tick.
    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    /// Force accumulated since the last tick.
    pub fn force(&self) -> Vec2 {
        self.force
    }

    /// Impulse accumulated since the last tick.
    pub fn impulse(&self) -> Vec2 {
        self.impulse
    }

    pub fn info(&self) -> Option<&BodyInfo> {
        self.info.as_ref()
    }

    pub fn info_mut(&mut self) -> Option<&mut BodyInfo> {
        self.info.as_mut()
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    pub fn is_removable(&self) -> bool {
        self.removable
    }

    /// True for `f64::INFINITY` mass.
    pub fn is_immovable(&self) -> bool {
        self.mass == f64::INFINITY
    }

    pub fn set_color(&mut self, color: RgbColor) {
        self.color = color;
    }

    /// Moves the body so its centroid lands on `centroid`, carrying the shape along.
    pub fn set_centroid(&mut self, centroid: Vec2) {
        self.shape.translate(centroid - self.centroid);
        self.centroid = centroid;
    }

    /// Sets the absolute rotation, turning the shape about the centroid by the difference.
    pub fn set_rotation(&mut self, angle: f64) {
        self.shape.rotate(angle - self.rotation, self.centroid);
        self.rotation = angle;
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn set_angular_velocity(&mut self, angular_velocity: f64) {
        self.angular_velocity = angular_velocity;
    }

    pub fn set_removability(&mut self, removable: bool) {
        self.removable = removable;
    }

    /// Stretches the shape along x and re-centres it on the current centroid.
    pub fn dilate_x(&mut self, factor: f64) {
        self.shape.dilate_x(factor);
        self.recenter();
    }

    /// Stretches the shape along y and re-centres it on the current centroid.
    pub fn dilate_y(&mut self, factor: f64) {
        self.shape.dilate_y(factor);
        self.recenter();
    }

    pub fn dilate(&mut self, factor: f64) {
        self.shape.dilate(factor);
        self.recenter();
    }

    fn recenter(&mut self) {
        let drifted = self.shape.centroid();
        self.shape.translate(self.centroid - drifted);
    }

    /// Accumulates a force, integrated over the next tick.
    pub fn add_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Accumulates an impulse, applied instantaneously on the next tick.
    pub fn add_impulse(&mut self, impulse: Vec2) {
        self.impulse += impulse;
    }

    /// Marks the body for removal at the next tick boundary.
    /// Non-removable bodies ignore the request.
    pub fn remove(&mut self) {
        if self.removable {
            self.removed = true;
        }
    }

    /// Advances the body by `dt` seconds. See [`integrator::integrate`].
    pub fn tick(&mut self, dt: f64) {
        integrator::integrate(self, dt);
    }
}

impl Drop for Body {
    fn drop(&mut self) {
        if let (Some(info), Some(hook)) = (self.info, self.release_hook.take()) {
            hook(info);
        }
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Body")
            .field("mass", &self.mass)
            .field("centroid", &self.centroid)
            .field("rotation", &self.rotation)
            .field("velocity", &self.velocity)
            .field("angular_velocity", &self.angular_velocity)
            .field("info", &self.info)
            .field("removable", &self.removable)
            .field("removed", &self.removed)
            .finish_non_exhaustive()
    }
}
