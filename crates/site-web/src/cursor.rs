use crate::constants::{ACTIVE_CLASS, CURSOR_SELECTOR, FOLLOWER_SELECTOR, HOVER_TARGETS_SELECTOR};
use crate::dom;
use crate::frame::{self, FrameScheduler};
use glam::Vec2;
use site_core::{Capabilities, FollowerState, FOLLOWER_SMOOTHING};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Wires the custom cursor pair: the dot tracks the pointer synchronously on
/// every move, the follower eases toward it once per frame. Touch and mobile
/// devices get neither; their markup is removed outright.
pub fn wire_cursor(window: &web::Window, document: &web::Document, caps: &Capabilities) {
    let cursor = document.query_selector(CURSOR_SELECTOR).ok().flatten();
    let follower_el = document.query_selector(FOLLOWER_SELECTOR).ok().flatten();

    if !caps.cursor_enabled() {
        if let Some(el) = cursor {
            el.remove();
        }
        if let Some(el) = follower_el {
            el.remove();
        }
        return;
    }
    let (Some(cursor), Some(follower_el)) = (cursor, follower_el) else {
        return;
    };

    let state = Rc::new(RefCell::new(FollowerState::default()));

    {
        let state = state.clone();
        let cursor = cursor.clone();
        dom::add_listener(
            window.as_ref(),
            "pointermove",
            move |ev: web::PointerEvent| {
                let p = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
                state.borrow_mut().set_raw(p);
                dom::set_transform(&cursor, &format!("translate3d({}px, {}px, 0)", p.x, p.y));
            },
        );
    }

    let scheduler = FrameScheduler::new();
    {
        let state = state.clone();
        let follower_el = follower_el.clone();
        scheduler.start(move || {
            let mut s = state.borrow_mut();
            s.step(FOLLOWER_SMOOTHING);
            dom::set_transform(
                &follower_el,
                &format!("translate3d({:.2}px, {:.2}px, 0)", s.eased.x, s.eased.y),
            );
        });
    }
    frame::pause_when_hidden(document, scheduler);

    // the dot grows over interactive elements
    for el in dom::query_all(document, HOVER_TARGETS_SELECTOR) {
        let enter_cursor = cursor.clone();
        dom::add_listener_0(el.as_ref(), "mouseenter", move || {
            let _ = enter_cursor.class_list().add_1(ACTIVE_CLASS);
        });
        let leave_cursor = cursor.clone();
        dom::add_listener_0(el.as_ref(), "mouseleave", move || {
            let _ = leave_cursor.class_list().remove_1(ACTIVE_CLASS);
        });
    }
}
