//! Headless widget cores for ranger.
//!
//! Widgets in this crate own their value model and interaction state, and
//! talk to the host only through the primitives in [`ranger_ui`]: pointer
//! events in, notifications out, layout boxes queried on demand.
//!
//! # Example
//!
//! ```
//! use ranger_components::range_slider::{RangeSlider, RangeSliderArgs, Thumb};
//! use ranger_ui::{CursorEvent, LayoutBox, Px, PxPosition};
//!
//! let mut slider = RangeSlider::new(
//!     RangeSliderArgs::default().min(0.0).max(10.0).min_value(2.0).max_value(8.0),
//! );
//! slider.attach_track(LayoutBox::new(Px(0), Px(100)));
//!
//! slider.on_thumb_pointer_down(Thumb::Max);
//! slider.handle_cursor_event(&CursorEvent::pressed(PxPosition::new(Px(80), Px(0))));
//! slider.handle_cursor_event(&CursorEvent::moved(PxPosition::new(Px(50), Px(0))));
//! slider.handle_cursor_event(&CursorEvent::released(PxPosition::new(Px(50), Px(0))));
//!
//! assert_eq!(slider.max_value(), 5.0);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod range_slider;
