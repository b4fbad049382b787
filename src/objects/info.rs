//! Game-side metadata a body can carry.

/// What a body represents to the game driving the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Background,
    Wall,
    Paddle,
    Ball,
    Brick,
    Player,
    Enemy,
    PlayerProjectile,
    EnemyProjectile,
    Blockade,
    Platform,
    /// Anything a game needs beyond the built-in kinds.
    Custom(u32),
}

/// Metadata attached to a body: its kind plus a free-form flag that games use
/// as a timer, a boolean, or a counter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyInfo {
    pub kind: BodyKind,
    pub flag: f64,
}

impl BodyInfo {
    pub fn new(kind: BodyKind, flag: f64) -> Self {
        BodyInfo { kind, flag }
    }

    pub fn is(&self, kind: BodyKind) -> bool {
        self.kind == kind
    }
}

impl From<BodyKind> for BodyInfo {
    fn from(kind: BodyKind) -> Self {
        BodyInfo::new(kind, 0.0)
    }
}

/// Invoked once with the body's info when the body is destroyed.
pub type ReleaseHook = Box<dyn FnOnce(BodyInfo)>;
