use crate::constants::{TYPING_INITIAL_DELAY_MS, TYPING_TEXTS, TYPING_TEXT_ID};
use site_core::TypingLoop;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drives the typing rotation on a self-rescheduling timeout chain; each
/// step supplies the delay until the next one.
pub fn wire_typing(document: &web::Document) {
    let Some(el) = document.get_element_by_id(TYPING_TEXT_ID) else {
        return;
    };
    let state = Rc::new(RefCell::new(TypingLoop::new(
        TYPING_TEXTS.iter().map(|s| s.to_string()).collect(),
    )));

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let (text, delay) = state.borrow_mut().step();
        el.set_text_content(Some(&text));
        schedule(&tick_clone, delay as i32);
    }) as Box<dyn FnMut()>));
    schedule(&tick, TYPING_INITIAL_DELAY_MS);
}

fn schedule(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>, delay_ms: i32) {
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                delay_ms,
            );
        }
    }
}
