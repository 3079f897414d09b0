use glam::Vec2;
use site_core::{glow_at, GLOW_SCALE_SPAN};
use web_sys as web;

use crate::dom;
use crate::MountError;

/// The organic-cell illustration that leans towards the pointer and glows as
/// it approaches the nucleus.
pub struct GlowView {
    cell: web::Element,
    body: web::Element,
    nucleus: web::Element,
    core: web::Element,
}

impl GlowView {
    pub fn mount(document: &web::Document) -> Result<Self, MountError> {
        let cell = document
            .get_element_by_id("cell")
            .ok_or(MountError::MissingElement("cell"))?;
        let body = document
            .get_element_by_id("cell-body")
            .ok_or(MountError::MissingElement("cell-body"))?;
        let nucleus = document
            .get_element_by_id("cell-nucleus")
            .ok_or(MountError::MissingElement("cell-nucleus"))?;
        let core = document
            .get_element_by_id("cell-core")
            .ok_or(MountError::MissingElement("cell-core"))?;
        Ok(Self {
            cell,
            body,
            nucleus,
            core,
        })
    }

    /// Restyle the cell for the current pointer position (client coords).
    pub fn apply(&self, client_x: f32, client_y: f32) {
        let rect = self.cell.get_bounding_client_rect();
        let sample = glow_at(
            Vec2::new(client_x, client_y),
            Vec2::new(rect.left() as f32, rect.top() as f32),
            Vec2::new(rect.width() as f32, rect.height() as f32),
        );
        let i = sample.intensity;
        let i2 = i * i;

        dom::set_style(
            &self.body,
            &format!(
                "transform: translate({:.2}px, {:.2}px)",
                sample.offset.x, sample.offset.y
            ),
        );

        dom::set_style(
            &self.nucleus,
            &format!(
                "background: radial-gradient(circle at 45% 45%, \
                 rgba(255,255,255,{:.3}) 0%, rgba(255,255,255,{:.3}) 25%, \
                 rgba(255,255,255,{:.3}) 50%, rgba(255,255,255,{:.3}) 75%, \
                 rgba(255,255,255,0.01) 100%); \
                 box-shadow: 0 0 {:.1}px {:.1}px rgba(255,255,255,{:.3}), \
                 inset 0 0 {:.1}px {:.1}px rgba(255,255,255,{:.3}); \
                 transform: scale({:.3})",
                0.06 + i * 0.08,
                0.04 + i * 0.06,
                0.02 + i * 0.04,
                0.01 + i * 0.02,
                40.0 + i * 50.0,
                i * 25.0,
                0.03 + i2 * 0.06,
                20.0 + i * 30.0,
                i * 15.0,
                0.02 + i2 * 0.05,
                1.0 + i * GLOW_SCALE_SPAN,
            ),
        );

        dom::set_style(
            &self.core,
            &format!(
                "background: radial-gradient(circle at 45% 45%, \
                 rgba(255,255,255,{:.3}) 0%, rgba(255,255,255,{:.3}) 30%, \
                 rgba(255,255,255,{:.3}) 60%, rgba(255,255,255,0.01) 100%); \
                 opacity: {:.3}",
                0.08 + i * 0.12,
                0.05 + i * 0.08,
                0.03 + i * 0.05,
                0.6 + i * 0.4,
            ),
        );
    }
}
