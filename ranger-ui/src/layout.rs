//! Layout-box queries for tracks.
//!
//! A headless widget does not lay itself out. The host measures the track
//! element and exposes its horizontal extent through [`TrackElement`]. The
//! widget queries it whenever it needs fresh geometry, typically on focus,
//! on hover and at the start of a drag.
//!
//! [`SharedLayoutBox`] is a ready-made implementation for hosts that push
//! layout results rather than answer queries: update it after every layout
//! pass and hand a clone to the widget.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::trace;

use crate::Px;

/// Horizontal extent of an element, in the same coordinate space as pointer
/// events.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutBox {
    /// Left edge.
    pub left: Px,
    /// Width.
    pub width: Px,
}

impl LayoutBox {
    /// Creates a new layout box.
    pub const fn new(left: Px, width: Px) -> Self {
        Self { left, width }
    }

    /// Right edge.
    pub fn right(&self) -> Px {
        self.left.saturating_add(self.width)
    }
}

/// An element whose layout box can be queried.
pub trait TrackElement: Send + Sync {
    /// Returns the element's current layout box, or `None` when the element
    /// is not laid out (detached, hidden, not yet measured).
    fn layout_box(&self) -> Option<LayoutBox>;
}

impl TrackElement for LayoutBox {
    fn layout_box(&self) -> Option<LayoutBox> {
        Some(*self)
    }
}

impl<T: TrackElement + ?Sized> TrackElement for Arc<T> {
    fn layout_box(&self) -> Option<LayoutBox> {
        (**self).layout_box()
    }
}

/// A layout box written by the host and read by widgets.
///
/// Clones share the same underlying box.
#[derive(Debug, Clone, Default)]
pub struct SharedLayoutBox {
    inner: Arc<RwLock<Option<LayoutBox>>>,
}

impl SharedLayoutBox {
    /// Creates a shared box that already holds `layout`.
    pub fn new(layout: LayoutBox) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(layout))),
        }
    }

    /// Publishes a new layout result.
    pub fn set(&self, layout: LayoutBox) {
        trace!(?layout, "layout box updated");
        *self.inner.write() = Some(layout);
    }

    /// Marks the element as not laid out.
    pub fn clear(&self) {
        *self.inner.write() = None;
    }
}

impl TrackElement for SharedLayoutBox {
    fn layout_box(&self) -> Option<LayoutBox> {
        *self.inner.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_layout_box_is_shared_between_clones() {
        let host = SharedLayoutBox::default();
        let widget = host.clone();
        assert_eq!(widget.layout_box(), None);

        host.set(LayoutBox::new(Px(5), Px(100)));
        assert_eq!(widget.layout_box(), Some(LayoutBox::new(Px(5), Px(100))));

        host.clear();
        assert_eq!(widget.layout_box(), None);
    }

    #[test]
    fn layout_box_right_edge() {
        assert_eq!(LayoutBox::new(Px(5), Px(100)).right(), Px(105));
        assert_eq!(
            LayoutBox::new(Px(i32::MAX), Px(1)).right(),
            Px(i32::MAX)
        );
    }

    #[test]
    fn arc_track_element_delegates() {
        let element: Arc<dyn TrackElement> = Arc::new(LayoutBox::new(Px(1), Px(2)));
        assert_eq!(element.layout_box(), Some(LayoutBox::new(Px(1), Px(2))));
    }
}
