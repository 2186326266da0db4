//! Translation from host scene events to gallery events.
//!
//! Kept free of `web_sys` so it can be tested on the host.

use crate::constants::{DETAIL_CLEARED_ELEMENT, DETAIL_INTERSECTED_ELEMENTS};
use gallery_core::{GalleryEvent, HostEvent};

/// Where the affected node sits inside an event's `detail`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailTarget {
    /// The event carries no node.
    None,
    /// First entry of an array field.
    First(&'static str),
    /// A plain field.
    Field(&'static str),
}

pub fn detail_target(event: HostEvent) -> DetailTarget {
    match event {
        HostEvent::RaycasterIntersection => DetailTarget::First(DETAIL_INTERSECTED_ELEMENTS),
        HostEvent::RaycasterIntersectionCleared => DetailTarget::Field(DETAIL_CLEARED_ELEMENT),
        _ => DetailTarget::None,
    }
}

/// Gallery event for a host event. Raycaster events without a resolvable
/// target yield `None` and are dropped.
pub fn gallery_event<N>(event: HostEvent, target: Option<N>) -> Option<GalleryEvent<N>> {
    Some(match event {
        HostEvent::Loaded => GalleryEvent::SceneLoaded,
        HostEvent::RaycasterIntersection => GalleryEvent::RayIntersected(target?),
        HostEvent::RaycasterIntersectionCleared => GalleryEvent::RayCleared(target?),
        HostEvent::Click => GalleryEvent::Click,
        HostEvent::Fusing => GalleryEvent::CursorFusing,
        HostEvent::FuseComplete => GalleryEvent::CursorFuseComplete,
        HostEvent::EnterVr => GalleryEvent::EnterVr,
        HostEvent::ExitVr => GalleryEvent::ExitVr,
    })
}
