// Startup sequencing, welcome panel, VR flag and page hooks.

mod common;

use common::{advance, attr, init_logs, node, ready_gallery};
use gallery_core::*;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn new_gallery() -> Gallery<MemoryNode> {
    init_logs();
    Gallery::new(Catalog::builtin().unwrap(), GalleryConfig::default())
}

#[test]
fn start_shows_loading_then_builds_after_delay() {
    let mut g = new_gallery();
    let mut scene = MemoryScene::with_gallery_page();
    let loading = node(&scene, LOADING_OVERLAY_SELECTOR);
    let ui = node(&scene, UI_OVERLAY_SELECTOR);

    g.handle(&mut scene, GalleryEvent::Start);
    assert_eq!(g.lifecycle().phase(), LifecyclePhase::Loading);
    assert!(!scene.has_class(&loading, HIDDEN_CLASS));
    assert!(scene.has_class(&ui, HIDDEN_CLASS));
    assert!(g.artwork_nodes().is_empty());

    advance(&mut g, &mut scene, ms(LOADING_DELAY_MS - 1));
    assert!(g.artwork_nodes().is_empty());

    advance(&mut g, &mut scene, ms(1));
    assert_eq!(g.lifecycle().phase(), LifecyclePhase::Ready);
    assert_eq!(g.artwork_nodes().len(), 6);
    assert!(scene.has_class(&loading, HIDDEN_CLASS));
}

#[test]
fn repeated_start_is_ignored() {
    let (mut g, mut scene) = ready_gallery();
    let pending = scene.pending_timers();
    g.handle(&mut scene, GalleryEvent::Start);
    assert_eq!(scene.pending_timers(), pending);
    assert_eq!(g.lifecycle().phase(), LifecyclePhase::Ready);
}

#[test]
fn waits_for_scene_loaded_event() {
    let mut g = new_gallery();
    let mut scene = MemoryScene::with_gallery_page();
    scene.set_loaded(false);
    g.handle(&mut scene, GalleryEvent::Start);
    advance(&mut g, &mut scene, ms(LOADING_DELAY_MS));

    assert_eq!(g.lifecycle().phase(), LifecyclePhase::AwaitingScene);
    let root = node(&scene, SCENE_SELECTOR);
    assert!(scene.is_subscribed(root, HostEvent::Loaded));
    assert!(g.artwork_nodes().is_empty());

    g.handle(&mut scene, GalleryEvent::SceneLoaded);
    assert_eq!(g.lifecycle().phase(), LifecyclePhase::Ready);
    assert_eq!(g.artwork_nodes().len(), 6);

    // A second loaded event does not build twice.
    g.handle(&mut scene, GalleryEvent::SceneLoaded);
    let container = node(&scene, ARTWORKS_CONTAINER_SELECTOR);
    assert_eq!(scene.children(container).len(), 6);
}

#[test]
fn missing_anchor_fails_without_touching_scene() {
    let mut g = new_gallery();
    let mut scene = MemoryScene::new();
    scene.add_element("a-scene", "museum-scene");
    scene.add_element("a-entity", "artworks-container");
    // No camera.
    g.handle(&mut scene, GalleryEvent::Start);
    let before = scene.node_count();
    advance(&mut g, &mut scene, ms(LOADING_DELAY_MS));

    assert_eq!(g.lifecycle().phase(), LifecyclePhase::Failed);
    assert_eq!(scene.node_count(), before);
    assert_eq!(scene.subscription_count(), 0);
    assert!(g.artwork_nodes().is_empty());

    // Still responsive: events are handled without panicking.
    g.handle(&mut scene, GalleryEvent::Click);
    g.handle(&mut scene, GalleryEvent::Key(KeyAction::Dismiss));
    g.handle(&mut scene, GalleryEvent::VisibilityChanged { hidden: true });
    assert!(scene.render_running());
}

#[test]
fn welcome_panel_fades_then_hides() {
    let (mut g, mut scene) = ready_gallery();
    advance(&mut g, &mut scene, ms(WELCOME_HIDE_DELAY_MS));
    assert_eq!(
        attr(&scene, WELCOME_PANEL_SELECTOR, "animation").unwrap(),
        "property: opacity; to: 0; dur: 1000"
    );
    assert_eq!(attr(&scene, WELCOME_PANEL_SELECTOR, "visible"), None);
    advance(&mut g, &mut scene, ms(u64::from(WELCOME_FADE_MS)));
    assert_eq!(
        attr(&scene, WELCOME_PANEL_SELECTOR, "visible").as_deref(),
        Some("false")
    );
}

#[test]
fn vr_mode_flag_follows_scene_events() {
    let (mut g, mut scene) = ready_gallery();
    let root = node(&scene, "a-scene");
    assert!(scene.is_subscribed(root, HostEvent::EnterVr));
    assert!(scene.is_subscribed(root, HostEvent::ExitVr));

    g.handle(&mut scene, GalleryEvent::EnterVr);
    assert!(g.lifecycle().is_vr_active());
    g.handle(&mut scene, GalleryEvent::ExitVr);
    assert!(!g.lifecycle().is_vr_active());
}

#[test]
fn visibility_pauses_and_resumes_render_loop() {
    let (mut g, mut scene) = ready_gallery();
    g.handle(&mut scene, GalleryEvent::VisibilityChanged { hidden: true });
    assert!(!scene.render_running());
    g.handle(&mut scene, GalleryEvent::VisibilityChanged { hidden: false });
    assert!(scene.render_running());
}

#[test]
fn orientation_changes_are_debounced() {
    let (mut g, mut scene) = ready_gallery();
    g.handle(&mut scene, GalleryEvent::OrientationChanged);
    advance(&mut g, &mut scene, ms(50));
    g.handle(&mut scene, GalleryEvent::OrientationChanged);
    advance(&mut g, &mut scene, ms(ORIENTATION_DEBOUNCE_MS - 1));
    assert_eq!(scene.resize_requests(), 0);
    advance(&mut g, &mut scene, ms(1));
    assert_eq!(scene.resize_requests(), 1);
}

#[test]
fn orientation_before_init_does_not_resize() {
    let mut g = new_gallery();
    let mut scene = MemoryScene::with_gallery_page();
    g.handle(&mut scene, GalleryEvent::OrientationChanged);
    advance(&mut g, &mut scene, ms(500));
    assert_eq!(scene.resize_requests(), 0);
}
