//! The boundary to the host VR scene framework.
//!
//! Everything the gallery does to the page goes through [`SceneHandle`]:
//! node lookup and creation, attributes, classes, parenting, event
//! subscription, timers and a couple of render-loop controls. The browser
//! implementation lives in the web crate; [`MemoryScene`] is an in-memory
//! implementation used by the tests.

mod memory;

pub use memory::{MemoryNode, MemoryScene};

use glam::Vec3;
use std::fmt;
use std::time::Duration;

/// Node types the builder instantiates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    Entity,
    Box,
    Plane,
    Text,
}

impl Primitive {
    /// Element tag used by the host framework.
    pub fn tag(self) -> &'static str {
        match self {
            Primitive::Entity => "a-entity",
            Primitive::Box => "a-box",
            Primitive::Plane => "a-plane",
            Primitive::Text => "a-text",
        }
    }
}

/// Host events the gallery subscribes to on individual nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostEvent {
    /// Scene finished loading its assets and systems.
    Loaded,
    /// Camera raycaster started intersecting one or more nodes.
    RaycasterIntersection,
    /// Camera raycaster stopped intersecting a node.
    RaycasterIntersectionCleared,
    Click,
    /// Gaze cursor started its dwell countdown.
    Fusing,
    /// Gaze cursor dwell completed.
    FuseComplete,
    EnterVr,
    ExitVr,
}

impl HostEvent {
    pub fn name(self) -> &'static str {
        match self {
            HostEvent::Loaded => "loaded",
            HostEvent::RaycasterIntersection => "raycaster-intersection",
            HostEvent::RaycasterIntersectionCleared => "raycaster-intersection-cleared",
            HostEvent::Click => "click",
            HostEvent::Fusing => "fusing",
            HostEvent::FuseComplete => "fusecomplete",
            HostEvent::EnterVr => "enter-vr",
            HostEvent::ExitVr => "exit-vr",
        }
    }
}

/// Identifies one scheduled callback. Handles are never reused, so a stale
/// handle can always be told apart from the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub u64);

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

pub trait SceneHandle {
    type Node: Clone + PartialEq + fmt::Debug;

    /// First node matching a CSS selector (`#id`, `.class` or a tag).
    fn query(&self, selector: &str) -> Option<Self::Node>;
    fn create(&mut self, primitive: Primitive) -> crate::Result<Self::Node>;
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn add_class(&mut self, node: &Self::Node, class: &str);
    fn remove_class(&mut self, node: &Self::Node, class: &str);
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node);
    /// Stable identifier for logs (the node's `id` attribute when present).
    fn describe(&self, node: &Self::Node) -> String;

    /// Forward `event` fired on `node` into the gallery's event queue.
    fn subscribe(&mut self, node: &Self::Node, event: HostEvent);

    /// Deliver `GalleryEvent::Timer(handle)` after `delay`.
    fn set_timeout(&mut self, delay: Duration) -> TimerHandle;
    fn clear_timeout(&mut self, handle: TimerHandle);

    /// Whether the scene node has finished loading.
    fn is_loaded(&self, scene: &Self::Node) -> bool;
    fn set_render_loop(&mut self, scene: &Self::Node, running: bool);
    /// Ask the renderer to match the current viewport size.
    fn resize_viewport(&mut self, scene: &Self::Node);
}

/// `"x y z"` as the host framework expects vector attributes.
pub fn vec3_attr(v: Vec3) -> String {
    format!("{} {} {}", v.x, v.y, v.z)
}

/// Property animation attribute value.
pub fn animation_attr(property: &str, from: Option<&str>, to: &str, dur_ms: u32) -> String {
    match from {
        Some(from) => format!("property: {property}; from: {from}; to: {to}; dur: {dur_ms}"),
        None => format!("property: {property}; to: {to}; dur: {dur_ms}"),
    }
}

/// Uniform scale animation.
pub fn scale_animation(scale: f32, dur_ms: u32) -> String {
    let s = format!("{scale} {scale} {scale}");
    animation_attr("scale", None, &s, dur_ms)
}
