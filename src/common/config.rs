//! Scene configuration.

use super::error::PhysicsError;

/// Tunables for a [`Scene`](crate::world::Scene).
///
/// # Builder Pattern
/// ```
/// use polyphys::SceneConfig;
///
/// let config = SceneConfig::new()
///     .with_body_capacity(64)
///     .with_newtonian_min_distance(8.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    /// Initial capacity of the body store. Default: 25.
    pub body_capacity: usize,
    /// Initial capacity of the force applier list. Default: 3.
    pub applier_capacity: usize,
    /// Initial capacity of each applier's bundle list. Default: 10.
    pub bundle_capacity: usize,
    /// Below this centroid separation Newtonian gravity is not applied. Default: 5.0.
    pub newtonian_min_distance: f64,
    /// Vertices per unit radius for polygonal circles. Default: 10.0.
    pub circle_dots_per_radius: f64,
}

impl SceneConfig {
    pub fn new() -> Self {
        SceneConfig {
            body_capacity: 25,
            applier_capacity: 3,
            bundle_capacity: 10,
            newtonian_min_distance: 5.0,
            circle_dots_per_radius: 10.0,
        }
    }

    pub fn with_body_capacity(mut self, capacity: usize) -> Self {
        self.body_capacity = capacity;
        self
    }

    pub fn with_applier_capacity(mut self, capacity: usize) -> Self {
        self.applier_capacity = capacity;
        self
    }

    pub fn with_bundle_capacity(mut self, capacity: usize) -> Self {
        self.bundle_capacity = capacity;
        self
    }

    pub fn with_newtonian_min_distance(mut self, distance: f64) -> Self {
        self.newtonian_min_distance = distance;
        self
    }

    pub fn with_circle_dots_per_radius(mut self, dots: f64) -> Self {
        self.circle_dots_per_radius = dots;
        self
    }

    /// Checks every setting, reporting the first one out of range.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if self.body_capacity == 0 {
            return Err(PhysicsError::ZeroCapacity("body"));
        }
        if self.applier_capacity == 0 {
            return Err(PhysicsError::ZeroCapacity("applier"));
        }
        if self.bundle_capacity == 0 {
            return Err(PhysicsError::ZeroCapacity("bundle"));
        }
        if !(self.newtonian_min_distance.is_finite() && self.newtonian_min_distance >= 0.0) {
            return Err(PhysicsError::InvalidParameter("newtonian_min_distance"));
        }
        if !(self.circle_dots_per_radius.is_finite() && self.circle_dots_per_radius > 0.0) {
            return Err(PhysicsError::InvalidParameter("circle_dots_per_radius"));
        }
        Ok(())
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::new()
    }
}
