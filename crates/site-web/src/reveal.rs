use crate::constants::{REVEALED_CLASS, REVEAL_ID_ATTR};
use crate::dom;
use site_core::{RevealTracker, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Single page-wide intersection observer performing one-shot reveals.
/// Elements can be registered at any time, including cards inserted after
/// the project grid renders; each element is unobserved as soon as its
/// reveal fires.
#[derive(Clone)]
pub struct RevealController {
    observer: web::IntersectionObserver,
    next_id: Rc<Cell<u64>>,
}

impl RevealController {
    pub fn new() -> anyhow::Result<Self> {
        let tracker = Rc::new(RefCell::new(RevealTracker::new()));
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let Some(id) = target
                        .get_attribute(REVEAL_ID_ATTR)
                        .and_then(|v| v.parse::<u64>().ok())
                    else {
                        continue;
                    };
                    if tracker.borrow_mut().should_reveal(id, true) {
                        let _ = target.class_list().add_1(REVEALED_CLASS);
                        observer.unobserve(&target);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let options = web::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer = web::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        callback.forget();

        Ok(Self {
            observer,
            next_id: Rc::new(Cell::new(0)),
        })
    }

    /// Registers an element for a one-shot reveal.
    pub fn observe(&self, element: &web::Element) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let _ = element.set_attribute(REVEAL_ID_ATTR, &id.to_string());
        self.observer.observe(element);
    }

    pub fn observe_all(&self, document: &web::Document, selector: &str) {
        for el in dom::query_all(document, selector) {
            self.observe(&el);
        }
    }
}
