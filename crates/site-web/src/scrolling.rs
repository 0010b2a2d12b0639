use crate::constants::{
    ANCHOR_LINK_SELECTOR, FLOATING_SHAPES_SELECTOR, GRID_BACKGROUND_SELECTOR,
    PARTICLES_CANVAS_SELECTOR, SCROLL_PROGRESS_ID,
};
use crate::dom;
use site_core::{
    parallax_offset, scroll_progress_percent, Capabilities, Throttle, PARALLAX_CANVAS_SPEED,
    PARALLAX_GRID_SPEED, PARALLAX_SHAPES_SPEED, SCROLL_THROTTLE_MS,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Scroll progress bar, throttled to one update per window.
pub fn wire_scroll_progress(window: &web::Window, document: &web::Document) {
    let Some(bar) = document.get_element_by_id(SCROLL_PROGRESS_ID) else {
        return;
    };
    let throttle = Rc::new(RefCell::new(Throttle::new(SCROLL_THROTTLE_MS)));
    let win = window.clone();
    let doc = document.clone();
    dom::add_listener_0(window.as_ref(), "scroll", move || {
        if !throttle.borrow_mut().allow(dom::now_ms()) {
            return;
        }
        let scroll_top = win.page_y_offset().unwrap_or(0.0);
        let doc_height = doc
            .document_element()
            .map(|e| e.scroll_height() as f64)
            .unwrap_or(0.0);
        let viewport = win
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let pct = scroll_progress_percent(scroll_top, doc_height, viewport);
        if let Some(html) = bar.dyn_ref::<web::HtmlElement>() {
            let _ = html.style().set_property("width", &format!("{pct:.2}%"));
        }
    });
}

/// Parallax background layers, raf-gated so a scroll burst costs at most one
/// frame of style writes.
pub fn wire_parallax(window: &web::Window, document: &web::Document, caps: &Capabilities) {
    if !caps.parallax_enabled() {
        return;
    }
    let selectors: [(&str, f64); 3] = [
        (GRID_BACKGROUND_SELECTOR, PARALLAX_GRID_SPEED),
        (FLOATING_SHAPES_SELECTOR, PARALLAX_SHAPES_SPEED),
        (PARTICLES_CANVAS_SELECTOR, PARALLAX_CANVAS_SPEED),
    ];
    let layers: Vec<(web::Element, f64)> = selectors
        .iter()
        .filter_map(|(sel, speed)| {
            document
                .query_selector(sel)
                .ok()
                .flatten()
                .map(|el| (el, *speed))
        })
        .collect();
    if layers.is_empty() {
        return;
    }

    let ticking = Rc::new(Cell::new(false));
    let win = window.clone();
    dom::add_listener_0(window.as_ref(), "scroll", move || {
        if ticking.get() {
            return;
        }
        ticking.set(true);
        let ticking = ticking.clone();
        let layers = layers.clone();
        let win_inner = win.clone();
        let cb = Closure::once_into_js(move || {
            let scrolled = win_inner.page_y_offset().unwrap_or(0.0);
            for (el, speed) in &layers {
                let y = parallax_offset(scrolled, *speed);
                dom::set_transform(el, &format!("translate3d(0, {y:.2}px, 0)"));
            }
            ticking.set(false);
        });
        let _ = win.request_animation_frame(cb.unchecked_ref());
    });
}

/// Smooth-scroll handling for in-page anchors.
pub fn wire_smooth_scroll(document: &web::Document) {
    for anchor in dom::query_all(document, ANCHOR_LINK_SELECTOR) {
        let doc = document.clone();
        let anchor_el = anchor.clone();
        dom::add_listener(anchor.as_ref(), "click", move |ev: web::Event| {
            ev.prevent_default();
            let Some(href) = anchor_el.get_attribute("href") else {
                return;
            };
            if let Ok(Some(target)) = doc.query_selector(&href) {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                opts.set_block(web::ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
    }
}
