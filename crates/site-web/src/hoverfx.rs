use crate::constants::{HOBBY_CARD_SELECTOR, MAGNETIC_SELECTOR, TILT_SELECTOR};
use crate::dom;
use site_core::{
    magnetic_offset, tilt_angles, Capabilities, Throttle, TILT_DIVISOR, TILT_DIVISOR_SOFT,
    TILT_THROTTLE_MS,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Magnetic elements drift toward the pointer while hovered.
pub fn wire_magnetic(document: &web::Document, caps: &Capabilities) {
    if !caps.hover_fx_enabled() {
        return;
    }
    for el in dom::query_all(document, MAGNETIC_SELECTOR) {
        let el_move = el.clone();
        dom::add_listener(el.as_ref(), "mousemove", move |ev: web::MouseEvent| {
            let rect = el_move.get_bounding_client_rect();
            let (dx, dy) = magnetic_offset(
                ev.client_x() as f64,
                ev.client_y() as f64,
                rect.left(),
                rect.top(),
                rect.width(),
                rect.height(),
            );
            dom::set_transform(&el_move, &format!("translate({dx:.1}px, {dy:.1}px)"));
        });
        let el_leave = el.clone();
        dom::add_listener_0(el.as_ref(), "mouseleave", move || {
            dom::set_transform(&el_leave, "translate(0, 0)");
        });
    }
}

/// Perspective tilt on hoverable cards. Hobby cards use a gentler divisor
/// and throttle their updates to roughly one per display frame.
pub fn wire_tilt(document: &web::Document, caps: &Capabilities) {
    if !caps.hover_fx_enabled() {
        return;
    }
    for el in dom::query_all(document, TILT_SELECTOR) {
        wire_tilt_card(el, TILT_DIVISOR, false);
    }
    for el in dom::query_all(document, HOBBY_CARD_SELECTOR) {
        wire_tilt_card(el, TILT_DIVISOR_SOFT, true);
    }
}

fn wire_tilt_card(el: web::Element, divisor: f64, throttled: bool) {
    let throttle = Rc::new(RefCell::new(Throttle::new(TILT_THROTTLE_MS)));
    let el_move = el.clone();
    dom::add_listener(el.as_ref(), "mousemove", move |ev: web::MouseEvent| {
        if throttled && !throttle.borrow_mut().allow(dom::now_ms()) {
            return;
        }
        let rect = el_move.get_bounding_client_rect();
        let (rx, ry) = tilt_angles(
            ev.client_x() as f64,
            ev.client_y() as f64,
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height(),
            divisor,
        );
        dom::set_transform(
            &el_move,
            &format!("perspective(1000px) rotateX({rx:.2}deg) rotateY({ry:.2}deg) translateY(-15px)"),
        );
    });
    let el_leave = el.clone();
    dom::add_listener_0(el.as_ref(), "mouseleave", move || {
        dom::set_transform(&el_leave, "");
    });
}
