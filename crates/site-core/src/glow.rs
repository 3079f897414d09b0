//! Mouse-proximity glow: a continuous function of pointer position against a
//! reference element's bounding box.

use glam::Vec2;

use crate::constants::GLOW_OFFSET_DIVISOR;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlowSample {
    /// Small element translation following the pointer, px.
    pub offset: Vec2,
    /// 1 at the box center, falling to 0 at the corner-to-center radius.
    pub intensity: f32,
}

/// Sample the glow for a pointer position against a box at `rect_origin` with
/// dimensions `rect_size` (all in the same coordinate space).
pub fn glow_at(pointer: Vec2, rect_origin: Vec2, rect_size: Vec2) -> GlowSample {
    let center = rect_size * 0.5;
    let local = pointer - rect_origin - center;
    let corner_radius = center.length();
    if corner_radius <= 0.0 {
        // Empty box: no meaningful center to glow around.
        return GlowSample::default();
    }
    GlowSample {
        offset: local / GLOW_OFFSET_DIVISOR,
        intensity: 1.0 - (local.length() / corner_radius).min(1.0),
    }
}
