//! Page-level names used by the browser front-end.
//!
//! Scene selectors and timings belong to `gallery_core::constants`; this file
//! only holds what the DOM wiring needs.

/// Optional start button; the page may instead call `startGalleryExperience`.
pub const START_BUTTON_ID: &str = "start-button";

pub const KEYDOWN_EVENT: &str = "keydown";
pub const CLICK_EVENT: &str = "click";
pub const CONTEXTMENU_EVENT: &str = "contextmenu";
pub const VISIBILITY_CHANGE_EVENT: &str = "visibilitychange";
pub const ORIENTATION_CHANGE_EVENT: &str = "orientationchange";
pub const DOM_CONTENT_LOADED_EVENT: &str = "DOMContentLoaded";

/// Fields read from a host event's `detail` object.
pub const DETAIL_INTERSECTED_ELEMENTS: &str = "els";
pub const DETAIL_CLEARED_ELEMENT: &str = "el";

/// Scene properties read via reflection.
pub const SCENE_HAS_LOADED_PROP: &str = "hasLoaded";
pub const SCENE_RENDERER_PROP: &str = "renderer";
pub const RENDERER_SET_SIZE_FN: &str = "setSize";
pub const SCENE_PLAY_FN: &str = "play";
pub const SCENE_PAUSE_FN: &str = "pause";

/// Largest delay handed to `setTimeout` (2^31 - 1 ms).
pub const MAX_TIMEOUT_MS: i32 = i32::MAX;

/// Milliseconds for `setTimeout`, clamped to what the browser accepts.
#[inline]
pub fn timeout_ms(delay: std::time::Duration) -> i32 {
    i32::try_from(delay.as_millis()).unwrap_or(MAX_TIMEOUT_MS)
}
