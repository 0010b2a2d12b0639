#![cfg(target_arch = "wasm32")]
use constants::{CONTACT_FORM_ID, CONTACT_SUBMIT_MESSAGE, LOADER_HIDE_DELAY_MS, LOADER_ID, REVEAL_SELECTOR};
use site_core::{is_mobile_user_agent, Capabilities};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub mod constants;
pub mod cursor;
pub mod dom;
pub mod frame;
pub mod github;
pub mod hoverfx;
pub mod menu;
pub mod particles;
pub mod reveal;
pub mod scramble;
pub mod scrolling;
pub mod theme;
pub mod typing;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;

    let caps = detect_capabilities(&window);
    log::info!(
        "[caps] constrained={} precise_pointer={}",
        caps.constrained,
        caps.precise_pointer
    );

    theme::wire_theme(&window, &document);
    menu::wire_menu(&document);
    typing::wire_typing(&document);
    scramble::wire_hero_scramble(&document, &caps);
    cursor::wire_cursor(&window, &document, &caps);
    particles::wire_particles(&window, &document, &caps);
    hoverfx::wire_magnetic(&document, &caps);
    hoverfx::wire_tilt(&document, &caps);
    scrolling::wire_scroll_progress(&window, &document);
    scrolling::wire_parallax(&window, &document, &caps);
    scrolling::wire_smooth_scroll(&document);
    wire_contact_form(&document);

    let reveal = reveal::RevealController::new()?;
    reveal.observe_all(&document, REVEAL_SELECTOR);

    // loader hides after a beat, then the project grid fills in off the
    // event loop; the animation loops above are independent callback chains
    let doc = document.clone();
    dom::set_timeout(LOADER_HIDE_DELAY_MS, move || {
        if let Some(loader) = doc.get_element_by_id(LOADER_ID) {
            let _ = loader.class_list().add_1("hidden");
        }
        let doc_fetch = doc.clone();
        spawn_local(async move {
            if let Err(e) = github::load_projects(doc_fetch.clone(), reveal).await {
                log::error!("github projects error: {:?}", e);
                github::show_load_error(&doc_fetch);
            }
        });
    });

    Ok(())
}

fn detect_capabilities(window: &web::Window) -> Capabilities {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let navigator = window.navigator();
    let ua = navigator.user_agent().unwrap_or_default();
    let has_touch = navigator.max_touch_points() > 0;
    Capabilities::classify(width, is_mobile_user_agent(&ua), has_touch)
}

fn wire_contact_form(document: &web::Document) {
    let Some(form) = document.get_element_by_id(CONTACT_FORM_ID) else {
        return;
    };
    dom::add_listener(form.as_ref(), "submit", move |ev: web::Event| {
        ev.prevent_default();
        if let Some(w) = web::window() {
            let _ = w.alert_with_message(CONTACT_SUBMIT_MESSAGE);
        }
    });
}
