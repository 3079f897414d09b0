#![cfg(target_arch = "wasm32")]

mod clock;
mod dom;
mod events;
mod frame;
mod glow;
mod scope;
mod starfield;
mod ui;

use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use site_core::{ClockState, HighlightCycle};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use web_sys as web;

use crate::events::ScrollInput;
use crate::frame::FrameContext;
use crate::scope::EventScope;

/// Why a component could not be attached to the current page.
#[derive(Debug, Error)]
pub enum MountError {
    /// The page simply does not carry this component's mount point.
    #[error("missing element #{0}")]
    MissingElement(&'static str),
    #[error("element #{0} is not the expected kind")]
    WrongElementKind(&'static str),
    #[error("canvas 2d context unavailable")]
    ContextUnavailable,
}

/// The mounted page: dropping it releases every listener and the pending
/// frame request.
pub struct App {
    scope: EventScope,
}

impl App {
    pub fn listener_count(&self) -> usize {
        self.scope.listener_count()
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");
    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

/// Tear the page down: deregister every event listener and cancel the
/// pending animation frame.
#[wasm_bindgen]
pub fn unmount() {
    if APP.with(|app| app.borrow_mut().take()).is_some() {
        log::info!("site-web unmounted");
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let mut scope = EventScope::new();
    let input = Rc::new(RefCell::new(ScrollInput::default()));

    // Mount whatever this page carries; absent mount points are a no-op
    let starfield = mount_optional("starfield", starfield::StarfieldView::mount(&document));
    let clock_view = mount_optional("clock dial", clock::ClockView::mount(&document));
    let glow_view = mount_optional("cell glow", glow::GlowView::mount(&document));
    let highlight = ui::HighlightView::mount(&document);

    events::wire_scroll(
        &mut scope,
        &window,
        &document,
        input.clone(),
        starfield.clone(),
    );
    if let Some(view) = starfield.clone() {
        events::wire_resize(&mut scope, &window, view);
    }
    if let Some(view) = glow_view {
        events::wire_pointer(&mut scope, &window, view);
    }
    ui::wire_faq(&mut scope, &document);

    if let Some(view) = &clock_view {
        view.apply_progress(input.borrow().progress);
    }

    log::info!(
        "mounted: starfield={} clock={} highlight={} ({} listeners)",
        starfield.is_some(),
        clock_view.is_some(),
        highlight.is_some(),
        scope.listener_count()
    );

    let mut ctx = FrameContext {
        input,
        starfield,
        clock_view,
        clock: ClockState::new(),
        highlight,
        cycle: HighlightCycle::new(),
        last_instant: Instant::now(),
    };
    scope.drive(move || ctx.frame());

    APP.with(|app| *app.borrow_mut() = Some(App { scope }));
    Ok(())
}

fn mount_optional<T>(what: &str, result: Result<T, MountError>) -> Option<T> {
    match result {
        Ok(view) => Some(view),
        Err(MountError::MissingElement(_)) => None,
        Err(e) => {
            log::warn!("skipping {what}: {e}");
            None
        }
    }
}
