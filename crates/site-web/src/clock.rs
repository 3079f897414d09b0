use web_sys as web;

use crate::dom;
use crate::MountError;

/// The hero dial's hands plus the page progress rail.
pub struct ClockView {
    hour_hand: web::Element,
    minute_hand: web::Element,
    progress_rail: Option<web::Element>,
}

impl ClockView {
    pub fn mount(document: &web::Document) -> Result<Self, MountError> {
        let hour_hand = document
            .get_element_by_id("clock-hour")
            .ok_or(MountError::MissingElement("clock-hour"))?;
        let minute_hand = document
            .get_element_by_id("clock-minute")
            .ok_or(MountError::MissingElement("clock-minute"))?;
        // The progress rail ships on the same page but is not required
        let progress_rail = document.get_element_by_id("scroll-progress");
        Ok(Self {
            hour_hand,
            minute_hand,
            progress_rail,
        })
    }

    /// Rotate both hands to their visual angles, degrees.
    pub fn apply(&self, hour_deg: f32, minute_deg: f32) {
        dom::set_style(
            &self.hour_hand,
            &format!("transform: translateX(-50%) rotate({hour_deg:.2}deg)"),
        );
        dom::set_style(
            &self.minute_hand,
            &format!("transform: translateX(-50%) rotate({minute_deg:.2}deg)"),
        );
    }

    pub fn apply_progress(&self, progress: f32) {
        if let Some(rail) = &self.progress_rail {
            dom::set_style(rail, &format!("height: {progress:.2}%"));
        }
    }
}
