use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Controllable requestAnimationFrame loop shared by the per-frame effects.
///
/// `start` installs a callback and begins ticking, cancelling any pending
/// tick first so stop/start cycles never leak duplicate chains. `stop`
/// cancels the pending tick but retains the callback so `restart` can resume
/// it, which is how owners react to visibility changes. The scheduler never
/// pauses itself; that is the owning effect's job.
#[derive(Clone, Default)]
pub struct FrameScheduler {
    inner: Rc<SchedulerInner>,
}

#[derive(Default)]
struct SchedulerInner {
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
    handle: Cell<Option<i32>>,
    running: Cell<bool>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self, mut callback: impl FnMut() + 'static) {
        self.stop();
        let inner = self.inner.clone();
        *self.inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            inner.handle.set(None);
            callback();
            // the callback may have stopped the loop
            if inner.running.get() {
                schedule(&inner);
            }
        }) as Box<dyn FnMut()>));
        self.inner.running.set(true);
        schedule(&self.inner);
    }

    /// Cancels the pending tick. The callback stays installed.
    pub fn stop(&self) {
        self.inner.running.set(false);
        if let Some(id) = self.inner.handle.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
    }

    /// Resumes ticking with the retained callback. No-op while running or
    /// before any `start`.
    pub fn restart(&self) {
        if self.inner.running.get() || self.inner.tick.borrow().is_none() {
            return;
        }
        self.inner.running.set(true);
        schedule(&self.inner);
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}

fn schedule(inner: &Rc<SchedulerInner>) {
    let Some(w) = web::window() else { return };
    let tick = inner.tick.borrow();
    if let Some(cb) = tick.as_ref() {
        if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            inner.handle.set(Some(id));
        }
    }
}

/// Stops the scheduler while the page is hidden and resumes it on return,
/// so background tabs do no per-frame work.
pub fn pause_when_hidden(document: &web::Document, scheduler: FrameScheduler) {
    let doc = document.clone();
    dom::add_listener_0(document.as_ref(), "visibilitychange", move || {
        if doc.hidden() {
            scheduler.stop();
        } else {
            scheduler.restart();
        }
    });
}
