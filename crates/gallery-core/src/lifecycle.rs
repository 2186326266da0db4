//! Startup sequencing and page-level hooks.
//!
//! Welcome → (start) Loading → (delay) anchors resolved → scene loaded →
//! Ready, with the welcome panel fading out a few seconds later. Also owns
//! the VR-mode flag, visibility pause/resume and the orientation debounce.

use crate::config::GalleryConfig;
use crate::constants::*;
use crate::error::{GalleryError, Result};
use crate::scene::{animation_attr, HostEvent, SceneHandle, TimerHandle};
use smallvec::SmallVec;
use std::fmt;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecyclePhase {
    Welcome,
    Loading,
    AwaitingScene,
    Ready,
    Failed,
}

/// Scene nodes resolved at initialization.
#[derive(Clone, Debug, PartialEq)]
pub struct Anchors<N> {
    pub scene: N,
    pub container: N,
    pub camera: N,
}

impl<N> Anchors<N> {
    pub fn resolve<S: SceneHandle<Node = N>>(scene: &S) -> Result<Self> {
        let find = |selector: &'static str| {
            scene
                .query(selector)
                .ok_or(GalleryError::MissingAnchor(selector))
        };
        Ok(Self {
            scene: find(SCENE_SELECTOR)?,
            container: find(ARTWORKS_CONTAINER_SELECTOR)?,
            camera: find(CAMERA_SELECTOR)?,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LifecycleTimer {
    Loading,
    WelcomeHide,
    WelcomeFade,
    Orientation,
}

/// What the owner must do after a lifecycle transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleSignal {
    /// Anchors are known and the scene has loaded: build the artworks.
    Build,
}

#[derive(Debug)]
pub struct Lifecycle<N> {
    phase: LifecyclePhase,
    anchors: Option<Anchors<N>>,
    vr_active: bool,
    timers: SmallVec<[(TimerHandle, LifecycleTimer); 4]>,
    loading_delay: Duration,
    welcome_hide_delay: Duration,
    orientation_debounce: Duration,
}

impl<N: Clone + PartialEq + fmt::Debug> Lifecycle<N> {
    pub fn new(config: &GalleryConfig) -> Self {
        Self {
            phase: LifecyclePhase::Welcome,
            anchors: None,
            vr_active: false,
            timers: SmallVec::new(),
            loading_delay: config.loading_delay,
            welcome_hide_delay: config.welcome_hide_delay,
            orientation_debounce: config.orientation_debounce,
        }
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    pub fn anchors(&self) -> Option<&Anchors<N>> {
        self.anchors.as_ref()
    }

    pub fn is_vr_active(&self) -> bool {
        self.vr_active
    }

    /// Hooks VR mode changes on the page's scene element.
    pub fn attach<S: SceneHandle<Node = N>>(&mut self, scene: &mut S) {
        if let Some(root) = scene.query("a-scene") {
            scene.subscribe(&root, HostEvent::EnterVr);
            scene.subscribe(&root, HostEvent::ExitVr);
        }
    }

    pub fn set_vr_active(&mut self, active: bool) {
        self.vr_active = active;
        log::info!("[vr] {}", if active { "entered" } else { "exited" });
    }

    pub fn start<S: SceneHandle<Node = N>>(&mut self, scene: &mut S) {
        if self.phase != LifecyclePhase::Welcome {
            log::warn!("[lifecycle] start ignored in phase {:?}", self.phase);
            return;
        }
        log::info!("[lifecycle] entering gallery");
        if let Some(loading) = scene.query(LOADING_OVERLAY_SELECTOR) {
            scene.remove_class(&loading, HIDDEN_CLASS);
        }
        if let Some(ui) = scene.query(UI_OVERLAY_SELECTOR) {
            scene.add_class(&ui, HIDDEN_CLASS);
        }
        self.schedule(scene, self.loading_delay, LifecycleTimer::Loading);
        self.phase = LifecyclePhase::Loading;
    }

    pub fn owns_timer(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|(h, _)| *h == handle)
    }

    pub fn on_timer<S: SceneHandle<Node = N>>(
        &mut self,
        scene: &mut S,
        handle: TimerHandle,
    ) -> Option<LifecycleSignal> {
        let idx = self.timers.iter().position(|(h, _)| *h == handle)?;
        let (_, kind) = self.timers.remove(idx);
        match kind {
            LifecycleTimer::Loading => self.initialize(scene),
            LifecycleTimer::WelcomeHide => {
                if let Some(panel) = scene.query(WELCOME_PANEL_SELECTOR) {
                    scene.set_attribute(
                        &panel,
                        "animation",
                        &animation_attr("opacity", None, "0", WELCOME_FADE_MS),
                    );
                    self.schedule(
                        scene,
                        Duration::from_millis(u64::from(WELCOME_FADE_MS)),
                        LifecycleTimer::WelcomeFade,
                    );
                }
                None
            }
            LifecycleTimer::WelcomeFade => {
                if let Some(panel) = scene.query(WELCOME_PANEL_SELECTOR) {
                    scene.set_attribute(&panel, "visible", "false");
                }
                None
            }
            LifecycleTimer::Orientation => {
                if let Some(a) = &self.anchors {
                    scene.resize_viewport(&a.scene);
                }
                None
            }
        }
    }

    fn initialize<S: SceneHandle<Node = N>>(&mut self, scene: &mut S) -> Option<LifecycleSignal> {
        log::info!("[lifecycle] initializing gallery");
        // The loading overlay belongs to the start sequence and goes away
        // whether or not initialization succeeds.
        if let Some(loading) = scene.query(LOADING_OVERLAY_SELECTOR) {
            scene.add_class(&loading, HIDDEN_CLASS);
        }
        let anchors = match Anchors::resolve(scene) {
            Ok(a) => a,
            Err(e) => {
                log::error!("[lifecycle] {}", e);
                self.phase = LifecyclePhase::Failed;
                return None;
            }
        };
        let loaded = scene.is_loaded(&anchors.scene);
        if !loaded {
            scene.subscribe(&anchors.scene, HostEvent::Loaded);
        }
        self.anchors = Some(anchors);
        if loaded {
            Some(LifecycleSignal::Build)
        } else {
            self.phase = LifecyclePhase::AwaitingScene;
            None
        }
    }

    pub fn on_scene_loaded(&mut self) -> Option<LifecycleSignal> {
        if self.phase != LifecyclePhase::AwaitingScene {
            return None;
        }
        Some(LifecycleSignal::Build)
    }

    /// Artworks and interactions are in place.
    pub fn mark_ready<S: SceneHandle<Node = N>>(&mut self, scene: &mut S) {
        self.phase = LifecyclePhase::Ready;
        self.schedule(scene, self.welcome_hide_delay, LifecycleTimer::WelcomeHide);
        log::info!("[lifecycle] gallery ready");
    }

    pub fn fail(&mut self) {
        self.phase = LifecyclePhase::Failed;
    }

    pub fn on_visibility_changed<S: SceneHandle<Node = N>>(&mut self, scene: &mut S, hidden: bool) {
        if let Some(a) = &self.anchors {
            scene.set_render_loop(&a.scene, !hidden);
        }
    }

    /// Restarts the debounce; the resize happens once changes settle.
    pub fn on_orientation_changed<S: SceneHandle<Node = N>>(&mut self, scene: &mut S) {
        if let Some(idx) = self
            .timers
            .iter()
            .position(|(_, k)| *k == LifecycleTimer::Orientation)
        {
            let (h, _) = self.timers.remove(idx);
            scene.clear_timeout(h);
        }
        self.schedule(scene, self.orientation_debounce, LifecycleTimer::Orientation);
    }

    fn schedule<S: SceneHandle<Node = N>>(
        &mut self,
        scene: &mut S,
        delay: Duration,
        kind: LifecycleTimer,
    ) {
        let handle = scene.set_timeout(delay);
        self.timers.push((handle, kind));
    }
}
