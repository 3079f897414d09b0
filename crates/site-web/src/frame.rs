use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use site_core::{ClockState, HighlightCycle};

use crate::clock::ClockView;
use crate::events::ScrollInput;
use crate::starfield::StarfieldView;
use crate::ui::HighlightView;

/// Everything the per-frame step touches. One loop drives the whole page;
/// components a page doesn't carry are simply absent.
pub struct FrameContext {
    pub input: Rc<RefCell<ScrollInput>>,
    pub starfield: Option<StarfieldView>,
    pub clock_view: Option<ClockView>,
    pub clock: ClockState,
    pub highlight: Option<HighlightView>,
    pub cycle: HighlightCycle,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = now.duration_since(self.last_instant).as_secs_f32();
        self.last_instant = now;

        // Drain the coalesced scroll input exactly once per frame
        let (deflect, parallax, progress) = {
            let mut input = self.input.borrow_mut();
            (input.drain(), input.parallax, input.progress)
        };

        if let Some(view) = &self.clock_view {
            if let Some((delta_px, elapsed_ms)) = deflect {
                self.clock.deflect(delta_px, elapsed_ms);
                view.apply_progress(progress);
            }
            // No-op while the scroll settle timer is pending
            self.clock.advance(dt_sec);
            let (hour_deg, minute_deg) = self.clock.visual_angles();
            view.apply(hour_deg, minute_deg);
        }

        if let Some(view) = &self.starfield {
            view.step(parallax);
        }

        if let Some(view) = &self.highlight {
            if let Some(state) = self.cycle.advance(dt_sec) {
                view.apply(state);
            }
        }
    }
}
