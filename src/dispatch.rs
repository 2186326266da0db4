//! Single-threaded event pump.
//!
//! Browser callbacks never touch the gallery directly: they post a
//! [`GalleryEvent`] and the pump hands queued events to
//! [`Gallery::handle`] one at a time. A callback that fires while the pump
//! is already running (e.g. a synchronous DOM event raised by an attribute
//! change) only enqueues; the running pump drains it.

use crate::scene::WebScene;
use gallery_core::{Catalog, EventQueue, Gallery, GalleryConfig, GalleryEvent};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct App {
    gallery: Gallery<web::Element>,
    scene: WebScene,
}

pub struct Dispatcher {
    queue: RefCell<EventQueue<web::Element>>,
    app: RefCell<App>,
}

impl Dispatcher {
    pub fn new(
        window: web::Window,
        document: web::Document,
        catalog: Catalog,
        config: GalleryConfig,
    ) -> Rc<Self> {
        Rc::new_cyclic(|weak| Dispatcher {
            queue: RefCell::new(EventQueue::new()),
            app: RefCell::new(App {
                gallery: Gallery::new(catalog, config),
                scene: WebScene::new(window, document, weak.clone()),
            }),
        })
    }

    /// Page-load subscriptions that do not wait for the visitor.
    pub fn attach(&self) {
        let Ok(mut app) = self.app.try_borrow_mut() else {
            log::warn!("[dispatch] attach while busy; skipped");
            return;
        };
        let App { gallery, scene } = &mut *app;
        gallery.attach(scene);
    }

    pub fn post(&self, event: GalleryEvent<web::Element>) {
        self.queue.borrow_mut().push(event);
        self.pump();
    }

    fn pump(&self) {
        let Ok(mut app) = self.app.try_borrow_mut() else {
            return;
        };
        let App { gallery, scene } = &mut *app;
        loop {
            let next = self.queue.borrow_mut().pop();
            let Some(event) = next else {
                break;
            };
            if let GalleryEvent::Timer(handle) = &event {
                scene.timer_fired(*handle);
            }
            gallery.handle(scene, event);
        }
    }
}
