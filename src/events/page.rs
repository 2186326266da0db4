use crate::constants::{ORIENTATION_CHANGE_EVENT, VISIBILITY_CHANGE_EVENT};
use crate::dispatch::Dispatcher;
use crate::dom;
use gallery_core::GalleryEvent;
use std::rc::Rc;
use web_sys as web;

pub fn wire_visibility_change(document: &web::Document, dispatcher: &Rc<Dispatcher>) {
    let dispatcher = Rc::downgrade(dispatcher);
    let doc = document.clone();
    dom::listen(document, VISIBILITY_CHANGE_EVENT, move |_ev: web::Event| {
        let hidden = doc.hidden();
        log::info!("[page] {}", if hidden { "hidden" } else { "visible" });
        if let Some(d) = dispatcher.upgrade() {
            d.post(GalleryEvent::VisibilityChanged { hidden });
        }
    });
}

pub fn wire_orientation_change(window: &web::Window, dispatcher: &Rc<Dispatcher>) {
    let dispatcher = Rc::downgrade(dispatcher);
    dom::listen(window, ORIENTATION_CHANGE_EVENT, move |_ev: web::Event| {
        if let Some(d) = dispatcher.upgrade() {
            d.post(GalleryEvent::OrientationChanged);
        }
    });
}
