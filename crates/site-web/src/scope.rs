use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Owned DOM listener registrations plus the pending animation-frame request.
///
/// Everything acquired through the scope is released when it drops: listeners
/// are removed from their targets and the in-flight frame request is
/// cancelled, so tearing the app down leaves no callbacks behind.
pub struct EventScope {
    listeners: Vec<ListenerHandle>,
    frame: Option<FrameHandle>,
}

struct ListenerHandle {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

struct FrameHandle {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl EventScope {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            frame: None,
        }
    }

    /// Attach a listener and record it for symmetric removal on drop.
    pub fn listen<T: AsRef<web::EventTarget>>(
        &mut self,
        target: &T,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let target = target.as_ref().clone();
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
        if target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .is_ok()
        {
            self.listeners.push(ListenerHandle {
                target,
                kind,
                closure,
            });
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Start the self-rescheduling frame loop. One per scope.
    pub fn drive(&mut self, mut frame_fn: impl FnMut() + 'static) {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick_clone = tick.clone();
        let pending_clone = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_clone.set(None);
            frame_fn();
            if let Some(w) = web::window() {
                if let Some(cb) = tick_clone.borrow().as_ref() {
                    if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        pending_clone.set(Some(id));
                    }
                }
            }
        }) as Box<dyn FnMut()>));
        if let Some(w) = web::window() {
            if let Ok(id) =
                w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
            {
                pending.set(Some(id));
            }
        }
        self.frame = Some(FrameHandle { tick, pending });
    }

    pub fn has_pending_frame(&self) -> bool {
        self.frame
            .as_ref()
            .map_or(false, |f| f.pending.get().is_some())
    }
}

impl Default for EventScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EventScope {
    fn drop(&mut self) {
        for handle in self.listeners.drain(..) {
            let _ = handle.target.remove_event_listener_with_callback(
                handle.kind,
                handle.closure.as_ref().unchecked_ref(),
            );
        }
        if let Some(frame) = self.frame.take() {
            if let Some(id) = frame.pending.take() {
                if let Some(w) = web::window() {
                    let _ = w.cancel_animation_frame(id);
                }
            }
            // The tick closure holds an Rc to itself; break the cycle
            frame.tick.borrow_mut().take();
        }
    }
}
