//! [`SceneHandle`] over the live DOM.

use crate::constants::*;
use crate::dispatch::Dispatcher;
use crate::dom;
use crate::host_events::{detail_target, gallery_event, DetailTarget};
use fnv::FnvHashMap;
use gallery_core::{GalleryError, HostEvent, Primitive, SceneHandle, TimerHandle};
use std::rc::Weak;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct WebScene {
    window: web::Window,
    document: web::Document,
    dispatcher: Weak<Dispatcher>,
    next_timer: u64,
    /// Gallery handle → browser timeout id, until fired or cleared.
    timers: FnvHashMap<TimerHandle, i32>,
}

impl WebScene {
    pub fn new(window: web::Window, document: web::Document, dispatcher: Weak<Dispatcher>) -> Self {
        Self {
            window,
            document,
            dispatcher,
            next_timer: 1,
            timers: FnvHashMap::default(),
        }
    }

    /// Forget a timeout the browser has already run.
    pub fn timer_fired(&mut self, handle: TimerHandle) {
        self.timers.remove(&handle);
    }
}

fn event_target(event: HostEvent, ev: &web::Event) -> Option<web::Element> {
    let target = detail_target(event);
    if target == DetailTarget::None {
        return None;
    }
    let detail = ev.dyn_ref::<web::CustomEvent>()?.detail();
    let value = match target {
        DetailTarget::First(field) => js_sys::Array::from(&dom::get_prop(&detail, field)).get(0),
        DetailTarget::Field(field) => dom::get_prop(&detail, field),
        DetailTarget::None => return None,
    };
    value.dyn_into::<web::Element>().ok()
}

impl SceneHandle for WebScene {
    type Node = web::Element;

    fn query(&self, selector: &str) -> Option<web::Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn create(&mut self, primitive: Primitive) -> gallery_core::Result<web::Element> {
        self.document
            .create_element(primitive.tag())
            .map_err(|e| GalleryError::Host(format!("create <{}>: {:?}", primitive.tag(), e)))
    }

    fn set_attribute(&mut self, node: &web::Element, name: &str, value: &str) {
        if let Err(e) = node.set_attribute(name, value) {
            log::warn!("[scene] set {}: {:?}", name, e);
        }
    }

    fn attribute(&self, node: &web::Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn add_class(&mut self, node: &web::Element, class: &str) {
        if let Err(e) = node.class_list().add_1(class) {
            log::warn!("[scene] add class {}: {:?}", class, e);
        }
    }

    fn remove_class(&mut self, node: &web::Element, class: &str) {
        if let Err(e) = node.class_list().remove_1(class) {
            log::warn!("[scene] remove class {}: {:?}", class, e);
        }
    }

    fn has_class(&self, node: &web::Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn append_child(&mut self, parent: &web::Element, child: &web::Element) {
        if let Err(e) = parent.append_child(child) {
            log::warn!("[scene] append_child: {:?}", e);
        }
    }

    fn describe(&self, node: &web::Element) -> String {
        let id = node.id();
        if id.is_empty() {
            node.tag_name().to_lowercase()
        } else {
            id
        }
    }

    fn subscribe(&mut self, node: &web::Element, event: HostEvent) {
        let dispatcher = self.dispatcher.clone();
        dom::listen(node, event.name(), move |ev: web::Event| {
            let Some(msg) = gallery_event(event, event_target(event, &ev)) else {
                log::debug!("[scene] {} without a target element", event.name());
                return;
            };
            if let Some(d) = dispatcher.upgrade() {
                d.post(msg);
            }
        });
    }

    fn set_timeout(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_timer);
        self.next_timer += 1;
        let dispatcher = self.dispatcher.clone();
        let cb = Closure::once_into_js(move || {
            if let Some(d) = dispatcher.upgrade() {
                d.post(gallery_core::GalleryEvent::Timer(handle));
            }
        });
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), timeout_ms(delay))
        {
            Ok(id) => {
                self.timers.insert(handle, id);
            }
            Err(e) => log::warn!("[scene] setTimeout failed for {}: {:?}", handle, e),
        }
        handle
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        if let Some(id) = self.timers.remove(&handle) {
            self.window.clear_timeout_with_handle(id);
        }
    }

    fn is_loaded(&self, scene: &web::Element) -> bool {
        dom::get_prop(scene, SCENE_HAS_LOADED_PROP)
            .as_bool()
            .unwrap_or(false)
    }

    fn set_render_loop(&mut self, scene: &web::Element, running: bool) {
        let method = if running { SCENE_PLAY_FN } else { SCENE_PAUSE_FN };
        if !dom::call_method(scene, method, &[]) {
            log::debug!("[scene] {}() unavailable", method);
        }
    }

    fn resize_viewport(&mut self, scene: &web::Element) {
        let renderer = dom::get_prop(scene, SCENE_RENDERER_PROP);
        if renderer.is_undefined() || renderer.is_null() {
            return;
        }
        let width = self.window.inner_width().unwrap_or(JsValue::UNDEFINED);
        let height = self.window.inner_height().unwrap_or(JsValue::UNDEFINED);
        dom::call_method(&renderer, RENDERER_SET_SIZE_FN, &[width, height]);
    }
}
