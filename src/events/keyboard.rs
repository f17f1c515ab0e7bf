use super::pointer::SharedController;
use crate::constants::{INFO_PANEL_ID, PANEL_TOGGLE_ID};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, controller: &SharedController) {
    match ev.key().as_str() {
        "z" | "Z" => {
            controller.borrow_mut().toggle_zone_debug();
            ev.prevent_default();
        }
        _ => {}
    }
}

pub fn wire_global_keydown(controller: SharedController) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &controller);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Collapse and expand the info panel from its toggle button.
pub fn wire_panel_toggle(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, PANEL_TOGGLE_ID, move || {
        if let Some(panel) = doc.get_element_by_id(INFO_PANEL_ID) {
            _ = panel.class_list().toggle("collapsed");
        }
    });
}
