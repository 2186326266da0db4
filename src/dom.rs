use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    let Some(el) = document.get_element_by_id(element_id) else {
        return false;
    };
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = el.add_event_listener_with_callback(
        crate::constants::CLICK_EVENT,
        closure.as_ref().unchecked_ref(),
    );
    closure.forget();
    true
}

/// Attach a listener for the lifetime of the page.
pub fn listen(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] failed to listen for {}: {:?}", event, e);
    }
    closure.forget();
}

/// Property lookup on an arbitrary JS object; `undefined` when absent.
#[inline]
pub fn get_prop(target: &JsValue, name: &str) -> JsValue {
    js_sys::Reflect::get(target, &JsValue::from_str(name)).unwrap_or(JsValue::UNDEFINED)
}

/// Call `target[name](...args)` if it is a function. Returns whether a call was made.
pub fn call_method(target: &JsValue, name: &str, args: &[JsValue]) -> bool {
    let Ok(f) = get_prop(target, name).dyn_into::<js_sys::Function>() else {
        return false;
    };
    let args: js_sys::Array = args.iter().collect();
    match f.apply(target, &args) {
        Ok(_) => true,
        Err(e) => {
            log::warn!("[dom] {}() threw: {:?}", name, e);
            false
        }
    }
}

/// Resolves once the document has been parsed.
pub async fn dom_ready(document: &web::Document) {
    if document.ready_state() != "loading" {
        return;
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let cb = Closure::once_into_js(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });
        let _ = doc.add_event_listener_with_callback(
            crate::constants::DOM_CONTENT_LOADED_EVENT,
            cb.unchecked_ref(),
        );
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}
