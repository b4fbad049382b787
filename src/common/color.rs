//! Display color carried by bodies. The kernel never reads it.

/// An RGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RgbColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: RgbColor = RgbColor { r: 1.0, g: 1.0, b: 1.0 };

    /// Creates a new color, clamping each component into [0, 1].
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        RgbColor {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }
}
