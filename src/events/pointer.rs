use crate::constants::{CLICK_EVENT, CONTEXTMENU_EVENT};
use crate::dispatch::Dispatcher;
use crate::dom;
use gallery_core::GalleryEvent;
use std::rc::Rc;
use web_sys as web;

/// Mouse clicks anywhere on the page activate the hovered artwork.
pub fn wire_document_click(document: &web::Document, dispatcher: &Rc<Dispatcher>) {
    let dispatcher = Rc::downgrade(dispatcher);
    dom::listen(document, CLICK_EVENT, move |_ev: web::Event| {
        if let Some(d) = dispatcher.upgrade() {
            d.post(GalleryEvent::Click);
        }
    });
}

/// Long-press on touch devices would open the context menu over the scene.
pub fn wire_context_menu(document: &web::Document) {
    dom::listen(document, CONTEXTMENU_EVENT, |ev: web::Event| {
        ev.prevent_default();
    });
}
