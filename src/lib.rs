#![cfg(target_arch = "wasm32")]
use gallery_core::{Catalog, GalleryConfig, GalleryEvent};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dispatch;
mod dom;
mod events;
mod host_events;
mod scene;

use dispatch::Dispatcher;

thread_local! {
    static DISPATCHER: RefCell<Option<Rc<Dispatcher>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gallery-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Called by the welcome panel's button. Safe to call more than once.
#[wasm_bindgen(js_name = startGalleryExperience)]
pub fn start_gallery_experience() {
    let dispatcher = DISPATCHER.with(|d| d.borrow().clone());
    match dispatcher {
        Some(d) => d.post(GalleryEvent::Start),
        None => log::warn!("[start] gallery not initialised yet"),
    }
}

async fn init() -> anyhow::Result<()> {
    let started_at = Instant::now();
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    dom::dom_ready(&document).await;

    static INITIALISED: AtomicBool = AtomicBool::new(false);
    if INITIALISED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let catalog = Catalog::builtin()?;
    log::info!("[catalog] {} artworks", catalog.len());

    let dispatcher = Dispatcher::new(
        window.clone(),
        document.clone(),
        catalog,
        GalleryConfig::default(),
    );
    dispatcher.attach();
    DISPATCHER.with(|d| *d.borrow_mut() = Some(dispatcher.clone()));

    events::wire_global_keydown(&window, &dispatcher);
    events::wire_document_click(&document, &dispatcher);
    events::wire_context_menu(&document);
    events::wire_visibility_change(&document, &dispatcher);
    events::wire_orientation_change(&window, &dispatcher);

    if dom::add_click_listener(&document, constants::START_BUTTON_ID, start_gallery_experience) {
        log::info!("[start] wired #{}", constants::START_BUTTON_ID);
    }

    log::info!(
        "gallery-web ready in {:.1} ms",
        started_at.elapsed().as_secs_f64() * 1000.0
    );
    Ok(())
}
