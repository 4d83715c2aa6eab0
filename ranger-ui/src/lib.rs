//! Host-facing primitives for headless ranger widgets.
//!
//! Widgets in `ranger-components` never touch a windowing system or a DOM.
//! The host translates its own input and layout into the small set of types
//! defined here and forwards them to the widget:
//!
//! - [`PxPosition`] pointer coordinates wrapped in [`CursorEvent`]s
//! - [`FocusOrigin`] for focus signals
//! - [`TrackElement`] for querying the layout box of a track
//! - [`Callback`] / [`CallbackWith`] for notification sinks
//!
//! # Example
//!
//! ```
//! use ranger_ui::{CursorEvent, LayoutBox, Px, PxPosition, SharedLayoutBox, TrackElement};
//!
//! let track = SharedLayoutBox::default();
//! assert!(track.layout_box().is_none());
//!
//! track.set(LayoutBox::new(Px(10), Px(200)));
//! assert_eq!(track.layout_box(), Some(LayoutBox::new(Px(10), Px(200))));
//!
//! let press = CursorEvent::pressed(PxPosition::new(Px(42), Px(0)));
//! assert!(press.is_pressed());
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod cursor;
pub mod focus;
pub mod layout;
pub mod logging;
pub mod prop;
pub mod px;

pub use cursor::{CursorEvent, CursorEventContent};
pub use focus::FocusOrigin;
pub use layout::{LayoutBox, SharedLayoutBox, TrackElement};
pub use prop::{Callback, CallbackWith};
pub use px::{Px, PxPosition};
