use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use site_core::{parallax_offset, star_screen_position, StarField};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::MountError;

/// The starfield canvas: core state plus the 2D drawing surface.
///
/// Shared (`Rc`) between the frame loop and the resize listener, which is the
/// only place the star set regenerates.
#[derive(Clone)]
pub struct StarfieldView {
    container: web::Element,
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: Rc<RefCell<StarField>>,
}

impl StarfieldView {
    pub fn mount(document: &web::Document) -> Result<Self, MountError> {
        let container = document
            .get_element_by_id("starfield")
            .ok_or(MountError::MissingElement("starfield"))?;
        let canvas = container
            .query_selector("canvas")
            .ok()
            .flatten()
            .ok_or(MountError::MissingElement("starfield canvas"))?;
        let canvas: web::HtmlCanvasElement = canvas
            .dyn_into()
            .map_err(|_| MountError::WrongElementKind("starfield canvas"))?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|obj| obj.dyn_into::<web::CanvasRenderingContext2d>().ok())
            .ok_or(MountError::ContextUnavailable)?;

        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let view = Self {
            container,
            canvas,
            ctx,
            field: Rc::new(RefCell::new(StarField::new(0.0, 0.0, seed))),
        };
        view.sync_size();
        Ok(view)
    }

    /// Match the canvas backing store to the container and regenerate the
    /// star set. Runs at mount and once per resize event.
    ///
    /// Backing size deliberately tracks CSS px, not devicePixelRatio: star
    /// density is defined against CSS dimensions.
    pub fn sync_size(&self) {
        let rect = self.container.get_bounding_client_rect();
        let width = rect.width().max(0.0) as f32;
        let height = rect.height().max(0.0) as f32;
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.field.borrow_mut().resize(width, height);
    }

    /// Parallax vector for the container's current viewport position.
    pub fn parallax(&self, window: &web::Window) -> Vec2 {
        let rect = self.container.get_bounding_client_rect();
        parallax_offset(
            rect.top() as f32,
            rect.height() as f32,
            dom::viewport_height(window),
        )
    }

    /// One frame: advance the orbit phases and redraw.
    pub fn step(&self, parallax: Vec2) {
        let mut field = self.field.borrow_mut();
        field.advance();
        self.draw(&field, parallax);
    }

    fn draw(&self, field: &StarField, parallax: Vec2) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
        for star in field.stars() {
            let pos = star_screen_position(star, parallax);
            let (x, y) = (pos.x as f64, pos.y as f64);

            // Outer glow: radial falloff to transparent
            if let Ok(gradient) =
                self.ctx
                    .create_radial_gradient(x, y, 0.0, x, y, star.glow_radius as f64)
            {
                let _ = gradient.add_color_stop(0.0, &rgba_white(star.opacity * 0.5));
                let _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
                self.ctx.begin_path();
                self.ctx.set_fill_style_canvas_gradient(&gradient);
                let _ = self
                    .ctx
                    .arc(x, y, star.glow_radius as f64, 0.0, std::f64::consts::TAU);
                self.ctx.fill();
            }

            // Core dot
            self.ctx.begin_path();
            self.ctx.set_fill_style_str(&rgba_white(star.opacity));
            let _ = self
                .ctx
                .arc(x, y, star.size as f64, 0.0, std::f64::consts::TAU);
            self.ctx.fill();
        }
    }
}

fn rgba_white(alpha: f32) -> String {
    format!("rgba(255, 255, 255, {:.3})", alpha)
}
