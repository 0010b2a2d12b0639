use crate::constants::{
    HERO_FIRST_LINE, HERO_SCRAMBLE_DELAY_MS, HERO_SECOND_LINE, HERO_SECOND_LINE_DELAY_MS,
    SCRAMBLE_FIRST_ID, SCRAMBLE_SECOND_ID,
};
use crate::dom;
use crate::frame::FrameScheduler;
use site_core::{render_html, Capabilities, ScrambleCell, Scrambler};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Per-element scramble effect. Exactly one transition may be in flight per
/// element: `set_text` cancels the previous tick chain before building the
/// new queue, so two writers never interleave on the same element.
pub struct ScrambleEffect {
    el: web::Element,
    scrambler: Rc<RefCell<Scrambler>>,
    scheduler: FrameScheduler,
}

impl ScrambleEffect {
    pub fn new(el: web::Element, seed: u64) -> Self {
        Self {
            el,
            scrambler: Rc::new(RefCell::new(Scrambler::new(seed))),
            scheduler: FrameScheduler::new(),
        }
    }

    /// Morphs the element's current text into `new_text`; `on_complete` runs
    /// exactly once, when every character has settled.
    pub fn set_text(&self, new_text: &str, on_complete: impl FnOnce() + 'static) {
        // cancel-before-replace: the old frame request must die first
        self.scheduler.stop();
        let old = self.el.text_content().unwrap_or_default();
        self.scrambler.borrow_mut().set_text(&old, new_text);

        let el = self.el.clone();
        let scrambler = self.scrambler.clone();
        let scheduler = self.scheduler.clone();
        let mut cells: Vec<ScrambleCell> = Vec::new();
        let mut done = Some(Box::new(on_complete) as Box<dyn FnOnce()>);
        self.scheduler.start(move || {
            let complete = scrambler.borrow_mut().tick(&mut cells);
            el.set_inner_html(&render_html(&cells));
            if complete {
                scheduler.stop();
                if let Some(cb) = done.take() {
                    cb();
                }
            }
        });
    }
}

/// Staggered hero headline reveal, desktop only.
pub fn wire_hero_scramble(document: &web::Document, caps: &Capabilities) {
    if !caps.scramble_enabled() {
        return;
    }
    let Some(first) = document.get_element_by_id(SCRAMBLE_FIRST_ID) else {
        return;
    };
    let seed = dom::now_ms() as u64;
    let first_fx = ScrambleEffect::new(first, seed);
    let second_fx = document
        .get_element_by_id(SCRAMBLE_SECOND_ID)
        .map(|el| ScrambleEffect::new(el, seed ^ 0x9E37_79B9_7F4A_7C15));

    dom::set_timeout(HERO_SCRAMBLE_DELAY_MS, move || {
        first_fx.set_text(HERO_FIRST_LINE, || {});
        if let Some(fx) = second_fx {
            dom::set_timeout(HERO_SECOND_LINE_DELAY_MS, move || {
                fx.set_text(HERO_SECOND_LINE, || {});
            });
        }
    });
}
