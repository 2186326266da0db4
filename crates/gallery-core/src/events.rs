use crate::scene::TimerHandle;
use std::collections::VecDeque;

/// Everything the host can tell the gallery. Each variant is handled by one
/// transition function on [`crate::Gallery`].
#[derive(Clone, Debug, PartialEq)]
pub enum GalleryEvent<N> {
    /// The visitor pressed the "enter gallery" control.
    Start,
    SceneLoaded,
    RayIntersected(N),
    RayCleared(N),
    /// Pointer click anywhere, or a click on the gaze cursor.
    Click,
    CursorFusing,
    CursorFuseComplete,
    Key(KeyAction),
    Timer(TimerHandle),
    VisibilityChanged { hidden: bool },
    OrientationChanged,
    EnterVr,
    ExitVr,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Show the description of the hovered artwork.
    Activate,
    /// Hide the description panel.
    Dismiss,
}

/// Maps a DOM `KeyboardEvent.key` value to a gallery action.
#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "Escape" => Some(KeyAction::Dismiss),
        "Enter" | " " => Some(KeyAction::Activate),
        _ => None,
    }
}

/// FIFO of pending events. Hosts push from callbacks and drain in order.
#[derive(Debug)]
pub struct EventQueue<N> {
    pending: VecDeque<GalleryEvent<N>>,
}

impl<N> Default for EventQueue<N> {
    fn default() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }
}

impl<N> EventQueue<N> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, event: GalleryEvent<N>) {
        self.pending.push_back(event);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<GalleryEvent<N>> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
