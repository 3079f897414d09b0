//! Scroll-derived quantities: the shared parallax vector and page progress.

use glam::Vec2;

use crate::constants::{PARALLAX_X_GAIN, PARALLAX_Y_GAIN};

/// Parallax vector for a container at the given viewport-relative position.
///
/// The container center's distance from the viewport center, normalized by
/// viewport height, scaled into per-axis pixel magnitudes. Stars multiply
/// this by their individual parallax weight.
#[inline]
pub fn parallax_offset(container_top: f32, container_height: f32, viewport_height: f32) -> Vec2 {
    if viewport_height <= 0.0 {
        return Vec2::ZERO;
    }
    let container_center = container_top + container_height * 0.5;
    let distance = (container_center - viewport_height * 0.5) / viewport_height;
    Vec2::new(distance * PARALLAX_X_GAIN, distance * PARALLAX_Y_GAIN)
}

/// Page scroll progress in [0, 100].
#[inline]
pub fn scroll_progress(scroll_y: f32, viewport_height: f32, document_height: f32) -> f32 {
    let track = document_height - viewport_height;
    if track <= 0.0 {
        return 0.0;
    }
    (scroll_y / track * 100.0).clamp(0.0, 100.0)
}
