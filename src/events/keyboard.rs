use crate::constants::KEYDOWN_EVENT;
use crate::dispatch::Dispatcher;
use crate::dom;
use gallery_core::{key_action, GalleryEvent, KeyAction};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Enter/Space activate the hovered artwork, Escape dismisses the panel.
pub fn wire_global_keydown(window: &web::Window, dispatcher: &Rc<Dispatcher>) {
    let dispatcher = Rc::downgrade(dispatcher);
    dom::listen(window, KEYDOWN_EVENT, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if ev.repeat() {
            return;
        }
        let Some(action) = key_action(&ev.key()) else {
            return;
        };
        if action == KeyAction::Activate {
            // Space would otherwise scroll the page behind the scene.
            ev.prevent_default();
        }
        log::debug!("[keys] {:?}", action);
        if let Some(d) = dispatcher.upgrade() {
            d.post(GalleryEvent::Key(action));
        }
    });
}
