use std::cell::RefCell;
use std::rc::Rc;

use site_core::{Accordion, Highlight};
use web_sys as web;

use crate::dom;
use crate::scope::EventScope;

/// Elements carrying a `data-highlight` word in the hero copy.
pub struct HighlightView {
    targets: Vec<web::Element>,
}

impl HighlightView {
    pub fn mount(document: &web::Document) -> Option<Self> {
        let targets = dom::collect(document, "[data-highlight]");
        (!targets.is_empty()).then_some(Self { targets })
    }

    pub fn apply(&self, highlight: Highlight) {
        let active = highlight.target();
        for el in &self.targets {
            let on = active.is_some() && el.get_attribute("data-highlight").as_deref() == active;
            let _ = el.set_attribute("data-active", if on { "1" } else { "0" });
        }
    }
}

/// Wire the FAQ accordion: one click listener per question, one open panel at
/// a time, reflected through `data-open` attributes the stylesheet keys on.
pub fn wire_faq(scope: &mut EventScope, document: &web::Document) {
    let items = dom::collect(document, "[data-faq-item]");
    if items.is_empty() {
        return;
    }
    let items = Rc::new(items);
    let state = Rc::new(RefCell::new(Accordion::new()));
    for (index, item) in items.iter().enumerate() {
        let Ok(Some(toggle)) = item.query_selector("[data-faq-toggle]") else {
            continue;
        };
        let items = items.clone();
        let state = state.clone();
        scope.listen(&toggle, "click", move |_ev| {
            state.borrow_mut().toggle(index);
            let state = state.borrow();
            for (i, item) in items.iter().enumerate() {
                let _ = item.set_attribute("data-open", if state.is_open(i) { "1" } else { "0" });
            }
        });
    }
}
