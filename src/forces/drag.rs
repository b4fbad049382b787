use super::{ForceCreator, ForceKind};
use crate::world::{Bodies, BodyId, Scene};

/// Linear drag `-gamma * v` on a single body.
pub struct Drag {
    pub gamma: f64,
    body: [BodyId; 1],
}

impl Drag {
    pub fn new(gamma: f64, body: BodyId) -> Self {
        Drag { gamma, body: [body] }
    }
}

impl ForceCreator for Drag {
    fn kind(&self) -> ForceKind {
        ForceKind::Drag
    }

    fn bodies(&self) -> &[BodyId] {
        &self.body
    }

    fn apply(&mut self, bodies: &mut Bodies) {
        if let Some(body) = bodies.get_mut(self.body[0]) {
            let resistance = body.velocity() * -self.gamma;
            body.add_force(resistance);
        }
    }
}

pub fn create_drag(scene: &mut Scene, gamma: f64, body: BodyId) {
    scene.add_force(Drag::new(gamma, body));
}
