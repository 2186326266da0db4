use crate::builder::build_artworks;
use crate::catalog::Catalog;
use crate::config::GalleryConfig;
use crate::events::{GalleryEvent, KeyAction};
use crate::interaction::InteractionController;
use crate::lifecycle::{Lifecycle, LifecycleSignal};
use crate::scene::SceneHandle;
use std::fmt;

/// The whole gallery: catalog, configuration and the two state machines.
/// Constructed once per page and driven only through [`Gallery::handle`].
#[derive(Debug)]
pub struct Gallery<N> {
    catalog: Catalog,
    config: GalleryConfig,
    interaction: InteractionController<N>,
    lifecycle: Lifecycle<N>,
    artwork_nodes: Vec<N>,
}

impl<N: Clone + PartialEq + fmt::Debug> Gallery<N> {
    pub fn new(catalog: Catalog, config: GalleryConfig) -> Self {
        Self {
            interaction: InteractionController::new(&config),
            lifecycle: Lifecycle::new(&config),
            catalog,
            config,
            artwork_nodes: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn interaction(&self) -> &InteractionController<N> {
        &self.interaction
    }

    pub fn lifecycle(&self) -> &Lifecycle<N> {
        &self.lifecycle
    }

    pub fn artwork_nodes(&self) -> &[N] {
        &self.artwork_nodes
    }

    /// Page-load hooks that do not wait for the visitor to start.
    pub fn attach<S: SceneHandle<Node = N>>(&mut self, scene: &mut S) {
        self.lifecycle.attach(scene);
    }

    pub fn handle<S: SceneHandle<Node = N>>(&mut self, scene: &mut S, event: GalleryEvent<N>) {
        match event {
            GalleryEvent::Start => self.lifecycle.start(scene),
            GalleryEvent::SceneLoaded => {
                if let Some(signal) = self.lifecycle.on_scene_loaded() {
                    self.apply(scene, signal);
                }
            }
            GalleryEvent::RayIntersected(node) => self.interaction.on_ray_intersected(scene, node),
            GalleryEvent::RayCleared(node) => self.interaction.on_ray_cleared(scene, node),
            GalleryEvent::Click => {
                self.interaction.activate(scene);
            }
            GalleryEvent::CursorFusing => self.interaction.on_cursor_fusing(scene),
            GalleryEvent::CursorFuseComplete => self.interaction.on_cursor_fuse_complete(scene),
            GalleryEvent::Key(KeyAction::Activate) => {
                self.interaction.activate(scene);
            }
            GalleryEvent::Key(KeyAction::Dismiss) => self.interaction.dismiss(scene),
            GalleryEvent::Timer(handle) => {
                if self.interaction.on_timer(scene, handle) {
                    return;
                }
                if !self.lifecycle.owns_timer(handle) {
                    log::debug!("[timer] {} is stale; ignored", handle);
                    return;
                }
                if let Some(signal) = self.lifecycle.on_timer(scene, handle) {
                    self.apply(scene, signal);
                }
            }
            GalleryEvent::VisibilityChanged { hidden } => {
                self.lifecycle.on_visibility_changed(scene, hidden)
            }
            GalleryEvent::OrientationChanged => self.lifecycle.on_orientation_changed(scene),
            GalleryEvent::EnterVr => self.lifecycle.set_vr_active(true),
            GalleryEvent::ExitVr => self.lifecycle.set_vr_active(false),
        }
    }

    fn apply<S: SceneHandle<Node = N>>(&mut self, scene: &mut S, signal: LifecycleSignal) {
        match signal {
            LifecycleSignal::Build => self.build(scene),
        }
    }

    fn build<S: SceneHandle<Node = N>>(&mut self, scene: &mut S) {
        let Some(camera) = self.lifecycle.anchors().map(|a| a.camera.clone()) else {
            return;
        };
        match build_artworks(scene, self.catalog.artworks(), &self.config.walls) {
            Ok(nodes) => {
                self.artwork_nodes = nodes;
                self.interaction.setup(scene, &camera);
                self.lifecycle.mark_ready(scene);
            }
            Err(e) => {
                log::error!("[build] {}", e);
                self.lifecycle.fail();
            }
        }
    }
}
