use crate::constants::{
    LIGHT_THEME_CLASS, MOON_ICON, SUN_ICON, THEME_ICON_SELECTOR, THEME_STORAGE_KEY, THEME_TOGGLE_ID,
};
use crate::dom;
use web_sys as web;

/// Theme toggle with a single persisted key; dark is the default.
pub fn wire_theme(window: &web::Window, document: &web::Document) {
    let Some(body) = document.body() else {
        return;
    };
    let storage = window.local_storage().ok().flatten();
    let icon = document.query_selector(THEME_ICON_SELECTOR).ok().flatten();

    let saved = storage
        .as_ref()
        .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten())
        .unwrap_or_else(|| "dark".to_string());
    if saved == "light" {
        let _ = body.class_list().add_1(LIGHT_THEME_CLASS);
        if let Some(icon) = &icon {
            icon.set_text_content(Some(SUN_ICON));
        }
    }

    dom::add_click_listener(document, THEME_TOGGLE_ID, move || {
        let _ = body.class_list().toggle(LIGHT_THEME_CLASS);
        let is_light = body.class_list().contains(LIGHT_THEME_CLASS);
        if let Some(icon) = &icon {
            icon.set_text_content(Some(if is_light { SUN_ICON } else { MOON_ICON }));
        }
        if let Some(s) = &storage {
            let _ = s.set_item(THEME_STORAGE_KEY, if is_light { "light" } else { "dark" });
        }
    });
}
