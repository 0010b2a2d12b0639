use crate::constants::PARTICLES_CANVAS_ID;
use crate::dom;
use crate::frame::{self, FrameScheduler};
use site_core::{Capabilities, Debounce, ParticleField, PARTICLE_FILL, RESIZE_DEBOUNCE_MS};
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wires the particle background: a fixed-count field advanced and drawn
/// once per frame, paused while the page is hidden, with a debounced resize
/// that re-bounds the field without discarding particles. On constrained
/// devices the canvas is removed and the field is never instantiated.
pub fn wire_particles(window: &web::Window, document: &web::Document, caps: &Capabilities) {
    let Some(el) = document.get_element_by_id(PARTICLES_CANVAS_ID) else {
        return;
    };
    if !caps.particles_enabled() {
        el.remove();
        return;
    }
    let Ok(canvas) = el.dyn_into::<web::HtmlCanvasElement>() else {
        return;
    };
    let Some(ctx) = context_2d(&canvas) else {
        return;
    };

    size_to_viewport(window, &canvas);
    let field = Rc::new(RefCell::new(ParticleField::new(
        canvas.width() as f32,
        canvas.height() as f32,
        caps.particle_count(),
        dom::now_ms() as u64,
    )));
    log::info!("[particles] field of {} started", field.borrow().len());

    let scheduler = FrameScheduler::new();
    {
        let field = field.clone();
        let canvas = canvas.clone();
        scheduler.start(move || {
            let mut f = field.borrow_mut();
            f.advance();
            render(&ctx, &canvas, &f);
        });
    }

    wire_resize(window, canvas, field);
    frame::pause_when_hidden(document, scheduler);
}

fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()
}

fn size_to_viewport(window: &web::Window, canvas: &web::HtmlCanvasElement) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    canvas.set_width(w.max(1.0) as u32);
    canvas.set_height(h.max(1.0) as u32);
}

fn render(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    field: &ParticleField,
) {
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    ctx.set_fill_style_str(PARTICLE_FILL);
    for p in field.particles() {
        ctx.begin_path();
        let _ = ctx.arc(p.x as f64, p.y as f64, p.radius as f64, 0.0, TAU);
        ctx.fill();
    }
}

fn wire_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    field: Rc<RefCell<ParticleField>>,
) {
    let debounce = Rc::new(RefCell::new(Debounce::new(RESIZE_DEBOUNCE_MS)));
    let win = window.clone();
    dom::add_listener_0(window.as_ref(), "resize", move || {
        debounce.borrow_mut().call(dom::now_ms());
        let debounce = debounce.clone();
        let canvas = canvas.clone();
        let field = field.clone();
        let win = win.clone();
        // every burst schedules a check; only the one after the quiet
        // period passes poll() and applies the resize
        dom::set_timeout(RESIZE_DEBOUNCE_MS as i32, move || {
            if !debounce.borrow_mut().poll(dom::now_ms()) {
                return;
            }
            size_to_viewport(&win, &canvas);
            field
                .borrow_mut()
                .set_bounds(canvas.width() as f32, canvas.height() as f32);
        });
    });
}
