//! Cursor and gesture events delivered by the host.
//!
//! Gesture recognition lives in the host. By the time an event reaches a
//! widget it has been reduced to a phase (press, move, release) and the
//! pointer position in physical pixels, in the same coordinate space as the
//! layout boxes returned by [`TrackElement`](crate::TrackElement).
//!
//! # Example
//!
//! ```
//! use ranger_ui::{CursorEvent, CursorEventContent, Px, PxPosition};
//!
//! let events = [
//!     CursorEvent::pressed(PxPosition::new(Px(10), Px(0))),
//!     CursorEvent::moved(PxPosition::new(Px(25), Px(2))),
//!     CursorEvent::released(PxPosition::new(Px(400), Px(90))),
//! ];
//!
//! let moves = events
//!     .iter()
//!     .filter(|event| matches!(event.content, CursorEventContent::Moved))
//!     .count();
//! assert_eq!(moves, 1);
//! ```

use crate::PxPosition;

/// The gesture phase a [`CursorEvent`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorEventContent {
    /// A pointer went down: mouse button press or touch start.
    Pressed,
    /// The pointer moved while a gesture is in progress.
    Moved,
    /// The pointer was released. Hosts must report releases that happen
    /// anywhere, not only over the widget.
    Released,
}

/// A single pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorEvent {
    /// Pointer position at the time of the event.
    pub position: PxPosition,
    /// Gesture phase.
    pub content: CursorEventContent,
}

impl CursorEvent {
    /// Creates a new event.
    pub const fn new(position: PxPosition, content: CursorEventContent) -> Self {
        Self { position, content }
    }

    /// A press at `position`.
    pub const fn pressed(position: PxPosition) -> Self {
        Self::new(position, CursorEventContent::Pressed)
    }

    /// A move to `position`.
    pub const fn moved(position: PxPosition) -> Self {
        Self::new(position, CursorEventContent::Moved)
    }

    /// A release at `position`.
    pub const fn released(position: PxPosition) -> Self {
        Self::new(position, CursorEventContent::Released)
    }

    /// Whether this is a press.
    pub fn is_pressed(&self) -> bool {
        self.content == CursorEventContent::Pressed
    }

    /// Whether this is a release.
    pub fn is_released(&self) -> bool {
        self.content == CursorEventContent::Released
    }
}
