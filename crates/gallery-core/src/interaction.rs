//! Hover tracking and the description panel.
//!
//! The controller reacts to raycaster, click, gaze-cursor and key events and
//! is the only owner of the hovered node, the artwork currently on the
//! description panel and the single panel timer (auto-hide or fade-out).

use crate::catalog::ArtworkRecord;
use crate::config::GalleryConfig;
use crate::constants::*;
use crate::error::{GalleryError, Result};
use crate::scene::{animation_attr, scale_animation, HostEvent, SceneHandle, TimerHandle};
use crate::wrap::wrap_text;
use std::fmt;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PanelTimerKind {
    AutoHide,
    FadeOut,
}

#[derive(Clone, Copy, Debug)]
struct PanelTimer {
    handle: TimerHandle,
    kind: PanelTimerKind,
}

#[derive(Clone, Debug)]
struct Shown<N> {
    node: N,
    artwork_id: String,
}

/// Coarse view of the controller state.
#[derive(Debug, PartialEq)]
pub enum Phase<'a, N> {
    Idle,
    Hovering(&'a N),
    /// The description panel shows the artwork on this node.
    Showing(&'a N),
}

#[derive(Debug)]
pub struct InteractionController<N> {
    hovered: Option<N>,
    shown: Option<Shown<N>>,
    panel_timer: Option<PanelTimer>,
    wrap_width: usize,
    auto_hide_delay: Duration,
}

impl<N: Clone + PartialEq + fmt::Debug> InteractionController<N> {
    pub fn new(config: &GalleryConfig) -> Self {
        Self {
            hovered: None,
            shown: None,
            panel_timer: None,
            wrap_width: config.wrap_width,
            auto_hide_delay: config.auto_hide_delay,
        }
    }

    pub fn hovered(&self) -> Option<&N> {
        self.hovered.as_ref()
    }

    /// Id of the artwork on the description panel, if it is showing.
    pub fn shown_artwork(&self) -> Option<&str> {
        self.shown.as_ref().map(|s| s.artwork_id.as_str())
    }

    pub fn phase(&self) -> Phase<'_, N> {
        match (&self.shown, &self.hovered) {
            (Some(s), _) => Phase::Showing(&s.node),
            (None, Some(h)) => Phase::Hovering(h),
            (None, None) => Phase::Idle,
        }
    }

    pub fn has_pending_timer(&self) -> bool {
        self.panel_timer.is_some()
    }

    /// Points the camera raycaster at interactive nodes and subscribes to the
    /// camera and cursor events the controller consumes.
    pub fn setup<S: SceneHandle<Node = N>>(&self, scene: &mut S, camera: &N) {
        scene.set_attribute(camera, "raycaster", RAYCASTER_CONFIG);
        scene.subscribe(camera, HostEvent::RaycasterIntersection);
        scene.subscribe(camera, HostEvent::RaycasterIntersectionCleared);
        if let Some(cursor) = scene.query(CURSOR_SELECTOR) {
            scene.subscribe(&cursor, HostEvent::Click);
            scene.subscribe(&cursor, HostEvent::Fusing);
            scene.subscribe(&cursor, HostEvent::FuseComplete);
        }
        log::info!("[interaction] ready");
    }

    pub fn on_ray_intersected<S: SceneHandle<Node = N>>(&mut self, scene: &mut S, node: N) {
        if !scene.has_class(&node, ARTWORK_CLASS) || self.hovered.as_ref() == Some(&node) {
            return;
        }
        if let Some(previous) = self.hovered.replace(node.clone()) {
            revert_hover_feedback(scene, &previous);
        }
        log::debug!("[hover] enter {}", scene.describe(&node));
        scene.set_attribute(&node, "animation", &scale_animation(HOVER_SCALE, HOVER_ANIMATION_MS));
        if let Some(cursor) = scene.query(CURSOR_SELECTOR) {
            scene.set_attribute(&cursor, "material", &format!("color: {CURSOR_HOVER_COLOR}"));
            scene.set_attribute(
                &cursor,
                "animation",
                &scale_animation(CURSOR_HOVER_SCALE, HOVER_ANIMATION_MS),
            );
        }
        // Looking back at the shown artwork keeps its panel up.
        let back_on_shown = self.shown.as_ref().is_some_and(|s| s.node == node);
        if back_on_shown && self.pending_kind() == Some(PanelTimerKind::AutoHide) {
            self.cancel_panel_timer(scene);
        }
    }

    pub fn on_ray_cleared<S: SceneHandle<Node = N>>(&mut self, scene: &mut S, node: N) {
        if self.hovered.as_ref() != Some(&node) {
            return;
        }
        self.hovered = None;
        log::debug!("[hover] leave {}", scene.describe(&node));
        revert_hover_feedback(scene, &node);

        // Any shown panel goes away once nothing is hovered, including one
        // whose artwork lost the hover to another artwork first.
        if self.shown.is_some() {
            self.cancel_panel_timer(scene);
            let handle = scene.set_timeout(self.auto_hide_delay);
            self.panel_timer = Some(PanelTimer {
                handle,
                kind: PanelTimerKind::AutoHide,
            });
        }
    }

    /// Click, dwell completion, Enter or Space. Returns whether a panel was
    /// shown.
    pub fn activate<S: SceneHandle<Node = N>>(&mut self, scene: &mut S) -> bool {
        let Some(node) = self.hovered.clone() else {
            return false;
        };
        match self.show_description(scene, &node) {
            Ok(()) => true,
            Err(e) => {
                log::error!("[panel] {}", e);
                false
            }
        }
    }

    pub fn on_cursor_fusing<S: SceneHandle<Node = N>>(&mut self, scene: &mut S) {
        if self.hovered.is_none() {
            return;
        }
        if let Some(cursor) = scene.query(CURSOR_SELECTOR) {
            scene.set_attribute(&cursor, "material", &format!("color: {CURSOR_HOVER_COLOR}"));
        }
    }

    pub fn on_cursor_fuse_complete<S: SceneHandle<Node = N>>(&mut self, scene: &mut S) {
        if self.hovered.is_none() {
            return;
        }
        self.activate(scene);
        if let Some(cursor) = scene.query(CURSOR_SELECTOR) {
            scene.set_attribute(&cursor, "material", &format!("color: {CURSOR_IDLE_COLOR}"));
        }
    }

    /// Escape, or the auto-hide timer. A panel already hidden or fading out
    /// is left alone.
    pub fn dismiss<S: SceneHandle<Node = N>>(&mut self, scene: &mut S) {
        if self.pending_kind() == Some(PanelTimerKind::FadeOut) {
            return;
        }
        self.shown = None;
        self.cancel_panel_timer(scene);
        let Some(panel) = scene.query(DESCRIPTION_PANEL_SELECTOR) else {
            return;
        };
        if scene.attribute(&panel, "visible").as_deref() != Some("true") {
            return;
        }
        scene.set_attribute(
            &panel,
            "animation",
            &animation_attr("opacity", Some("1"), "0", PANEL_FADE_OUT_MS),
        );
        let handle = scene.set_timeout(Duration::from_millis(u64::from(PANEL_FADE_OUT_MS)));
        self.panel_timer = Some(PanelTimer {
            handle,
            kind: PanelTimerKind::FadeOut,
        });
        log::debug!("[panel] hiding");
    }

    /// Returns false when the handle is not the panel timer currently
    /// tracked, including handles that were superseded.
    pub fn on_timer<S: SceneHandle<Node = N>>(&mut self, scene: &mut S, handle: TimerHandle) -> bool {
        match self.panel_timer {
            Some(t) if t.handle == handle => {
                self.panel_timer = None;
                match t.kind {
                    PanelTimerKind::AutoHide => self.dismiss(scene),
                    PanelTimerKind::FadeOut => {
                        if let Some(panel) = scene.query(DESCRIPTION_PANEL_SELECTOR) {
                            scene.set_attribute(&panel, "visible", "false");
                        }
                    }
                }
                true
            }
            _ => false,
        }
    }

    fn show_description<S: SceneHandle<Node = N>>(&mut self, scene: &mut S, node: &N) -> Result<()> {
        let name = scene.describe(node);
        let payload = scene
            .attribute(node, ARTWORK_DATA_ATTR)
            .ok_or_else(|| GalleryError::MissingArtworkData(name.clone()))?;
        let artwork = ArtworkRecord::from_attribute(&name, &payload)?;
        log::info!("[panel] showing `{}`", artwork.id);

        if let Some(el) = scene.query(ARTWORK_TITLE_SELECTOR) {
            scene.set_attribute(&el, "value", &artwork.title);
        }
        if let Some(el) = scene.query(ARTWORK_INFO_SELECTOR) {
            scene.set_attribute(&el, "value", &artwork.info_line());
        }
        if let Some(el) = scene.query(ARTWORK_DESCRIPTION_SELECTOR) {
            scene.set_attribute(&el, "value", &wrap_text(&artwork.description, self.wrap_width));
        }
        if let Some(panel) = scene.query(DESCRIPTION_PANEL_SELECTOR) {
            scene.set_attribute(&panel, "visible", "true");
            scene.set_attribute(
                &panel,
                "animation",
                &animation_attr("opacity", Some("0"), "1", PANEL_FADE_IN_MS),
            );
        }
        self.cancel_panel_timer(scene);
        self.shown = Some(Shown {
            node: node.clone(),
            artwork_id: artwork.id,
        });
        Ok(())
    }

    fn pending_kind(&self) -> Option<PanelTimerKind> {
        self.panel_timer.map(|t| t.kind)
    }

    fn cancel_panel_timer<S: SceneHandle<Node = N>>(&mut self, scene: &mut S) {
        if let Some(t) = self.panel_timer.take() {
            scene.clear_timeout(t.handle);
        }
    }
}

fn revert_hover_feedback<S: SceneHandle>(scene: &mut S, node: &S::Node) {
    scene.set_attribute(node, "animation", &scale_animation(1.0, HOVER_ANIMATION_MS));
    if let Some(cursor) = scene.query(CURSOR_SELECTOR) {
        scene.set_attribute(&cursor, "material", &format!("color: {CURSOR_IDLE_COLOR}"));
        scene.set_attribute(&cursor, "animation", &scale_animation(1.0, HOVER_ANIMATION_MS));
    }
}
