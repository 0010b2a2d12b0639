use crate::constants::{ACTIVE_CLASS, MENU_TOGGLE_ID, NAV_LINKS_ID};
use crate::dom;
use web_sys as web;

pub fn wire_menu(document: &web::Document) {
    let Some(toggle) = document.get_element_by_id(MENU_TOGGLE_ID) else {
        return;
    };
    let Some(nav) = document.get_element_by_id(NAV_LINKS_ID) else {
        return;
    };

    {
        let nav = nav.clone();
        let toggle = toggle.clone();
        dom::add_click_listener(document, MENU_TOGGLE_ID, move || {
            let _ = nav.class_list().toggle(ACTIVE_CLASS);
            let _ = toggle.class_list().toggle(ACTIVE_CLASS);
        });
    }

    // choosing a link closes the menu
    for link in dom::query_all_within(&nav, "a") {
        let nav = nav.clone();
        let toggle = toggle.clone();
        dom::add_listener_0(link.as_ref(), "click", move || {
            let _ = nav.class_list().remove_1(ACTIVE_CLASS);
            let _ = toggle.class_list().remove_1(ACTIVE_CLASS);
        });
    }
}
