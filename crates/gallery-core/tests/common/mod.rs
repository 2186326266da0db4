// Shared helpers for driving a gallery against the in-memory scene.

#![allow(dead_code)]

use gallery_core::*;
use std::time::Duration;

pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn artwork(id: &str, wall: Wall, size: FrameSize) -> ArtworkRecord {
    ArtworkRecord {
        id: id.to_string(),
        title: format!("{id} title"),
        artist: format!("{id} artist"),
        year: "1900".to_string(),
        description: format!("Description of {id}, long enough to need wrapping across more than one line of the panel."),
        image_url: format!("assets/{id}.jpg"),
        wall_position: wall,
        frame_size: size,
    }
}

/// Builtin catalog, already started and built on a complete page.
pub fn ready_gallery() -> (Gallery<MemoryNode>, MemoryScene) {
    let catalog = Catalog::builtin().expect("builtin catalog parses");
    ready_gallery_with(catalog)
}

pub fn ready_gallery_with(catalog: Catalog) -> (Gallery<MemoryNode>, MemoryScene) {
    init_logs();
    let mut scene = MemoryScene::with_gallery_page();
    let mut gallery = Gallery::new(catalog, GalleryConfig::default());
    gallery.attach(&mut scene);
    gallery.handle(&mut scene, GalleryEvent::Start);
    advance(&mut gallery, &mut scene, Duration::from_millis(LOADING_DELAY_MS));
    assert_eq!(gallery.lifecycle().phase(), LifecyclePhase::Ready);
    (gallery, scene)
}

/// Moves the virtual clock forward, delivering due timers in order.
pub fn advance(gallery: &mut Gallery<MemoryNode>, scene: &mut MemoryScene, by: Duration) {
    let until = scene.now() + by;
    while let Some(handle) = scene.pop_due(until) {
        gallery.handle(scene, GalleryEvent::Timer(handle));
    }
    scene.set_now(until);
}

pub fn node(scene: &MemoryScene, selector: &str) -> MemoryNode {
    scene
        .query(selector)
        .unwrap_or_else(|| panic!("missing {selector}"))
}

pub fn attr(scene: &MemoryScene, selector: &str, name: &str) -> Option<String> {
    scene.attribute(&node(scene, selector), name)
}

pub fn panel_visible(scene: &MemoryScene) -> bool {
    attr(scene, DESCRIPTION_PANEL_SELECTOR, "visible").as_deref() == Some("true")
}
