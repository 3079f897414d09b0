use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use instant::Instant;
use site_core::scroll_progress;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::glow::GlowView;
use crate::scope::EventScope;
use crate::starfield::StarfieldView;

/// Scroll measurements shared between the listeners and the frame loop.
///
/// Listeners only write here; the frame loop drains the cell once per frame,
/// so a burst of scroll events coalesces into a single update.
#[derive(Default)]
pub struct ScrollInput {
    pending_delta_px: f32,
    elapsed_ms: f32,
    dirty: bool,
    pub parallax: Vec2,
    pub progress: f32,
}

impl ScrollInput {
    /// Take the coalesced deflection if any scroll arrived since last drain:
    /// accumulated pixel delta and the latest inter-event elapsed time.
    pub fn drain(&mut self) -> Option<(f32, f32)> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;
        let delta = self.pending_delta_px;
        self.pending_delta_px = 0.0;
        Some((delta, self.elapsed_ms))
    }
}

pub fn wire_scroll(
    scope: &mut EventScope,
    window: &web::Window,
    document: &web::Document,
    input: Rc<RefCell<ScrollInput>>,
    starfield: Option<StarfieldView>,
) {
    let win = window.clone();
    let doc = document.clone();
    let mut last_scroll_y = dom::scroll_y(&win);
    let mut last_event = Instant::now();

    // Seed the initial position before the first scroll arrives
    {
        let mut input = input.borrow_mut();
        input.progress = scroll_progress(
            last_scroll_y,
            dom::viewport_height(&win),
            dom::document_height(&doc),
        );
        if let Some(view) = &starfield {
            input.parallax = view.parallax(&win);
        }
    }

    scope.listen(window, "scroll", move |_ev| {
        let now = Instant::now();
        let elapsed_ms = now.duration_since(last_event).as_secs_f32() * 1000.0;
        last_event = now;

        let scroll_y = dom::scroll_y(&win);
        let mut input = input.borrow_mut();
        input.pending_delta_px += scroll_y - last_scroll_y;
        input.elapsed_ms = elapsed_ms;
        input.dirty = true;
        input.progress = scroll_progress(
            scroll_y,
            dom::viewport_height(&win),
            dom::document_height(&doc),
        );
        if let Some(view) = &starfield {
            input.parallax = view.parallax(&win);
        }
        last_scroll_y = scroll_y;
    });
}

/// Regenerate the star set for the new surface, once per resize event.
pub fn wire_resize(scope: &mut EventScope, window: &web::Window, starfield: StarfieldView) {
    scope.listen(window, "resize", move |_ev| {
        starfield.sync_size();
    });
}

pub fn wire_pointer(scope: &mut EventScope, window: &web::Window, glow: GlowView) {
    scope.listen(window, "pointermove", move |ev| {
        let ev: web::PointerEvent = ev.unchecked_into();
        glow.apply(ev.client_x() as f32, ev.client_y() as f32);
    });
}
