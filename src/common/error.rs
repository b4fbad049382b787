//! Error types for kernel operations.
//!
//! Most misuse of the kernel is a programmer error and panics at the call site.
//! The `try_*` entry points report the same conditions as a [`PhysicsError`]
//! for callers that would rather check than abort.

use std::fmt;

/// Errors that can occur while building or querying a simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// A polygon needs at least three vertices.
    TooFewVertices { count: usize },
    /// Star inner radius must not exceed the outer radius.
    InvalidStarRadii { inner: f64, outer: f64 },
    /// A regular shape needs at least this many points.
    TooFewPoints { points: usize, min: usize },
    /// Body index is past the end of the scene's body list.
    BodyOutOfBounds { index: usize, count: usize },
    /// The body referenced by a handle has already been purged.
    StaleBody,
    /// A capacity setting must be at least one.
    ZeroCapacity(&'static str),
    /// A distance or density setting must be finite and non-negative.
    InvalidParameter(&'static str),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::TooFewVertices { count } => {
                write!(f, "polygon needs at least 3 vertices (got {})", count)
            }
            PhysicsError::InvalidStarRadii { inner, outer } => {
                write!(f, "star inner radius {} exceeds outer radius {}", inner, outer)
            }
            PhysicsError::TooFewPoints { points, min } => {
                write!(f, "shape needs at least {} points (got {})", min, points)
            }
            PhysicsError::BodyOutOfBounds { index, count } => {
                write!(f, "body index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::StaleBody => write!(f, "body has already been removed from the scene"),
            PhysicsError::ZeroCapacity(what) => write!(f, "{} capacity must be at least 1", what),
            PhysicsError::InvalidParameter(what) => {
                write!(f, "{} must be finite and non-negative", what)
            }
        }
    }
}

impl std::error::Error for PhysicsError {}
