//! Pure transform helpers for drawing a range slider.
//!
//! All helpers take the cached [`PercentValue`] and return the horizontal
//! translate/scale a renderer should apply. They render to CSS-equivalent
//! transform strings through `Display`.

use std::fmt;

use super::value_model::{PercentValue, Thumb};

/// Horizontal translate (in percent of the element) and scale for a track
/// segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackTransform {
    /// Translation along X, in percent.
    pub translate_x: f64,
    /// Scale along X.
    pub scale_x: f64,
}

impl fmt::Display for TrackTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translateX({}%) scale3d({},1,1)",
            self.translate_x, self.scale_x
        )
    }
}

/// Leftward translation of a thumb container, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbTransform {
    /// How far the container is shifted left, in percent.
    pub offset: f64,
}

impl fmt::Display for ThumbTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translateX(-{}%)", self.offset)
    }
}

/// The filled segment between the two thumbs.
pub(super) fn track_fill(percent: PercentValue) -> TrackTransform {
    TrackTransform {
        translate_x: (percent.min * 100.0).round(),
        scale_x: (1.0 - percent.min) - (1.0 - percent.max),
    }
}

/// The unfilled segment on the outer side of `thumb`.
pub(super) fn track_background(thumb: Thumb, percent: PercentValue) -> TrackTransform {
    let fraction = percent.get(thumb);
    let value = (fraction * 100.0).round();
    let rest = 100.0 - value;

    match thumb {
        Thumb::Min => TrackTransform {
            translate_x: -rest,
            scale_x: fraction,
        },
        Thumb::Max => TrackTransform {
            translate_x: 0.0,
            scale_x: 1.0 - fraction,
        },
    }
}

/// The container carrying `thumb`'s marker.
pub(super) fn thumb_container(thumb: Thumb, percent: PercentValue) -> ThumbTransform {
    ThumbTransform {
        offset: (1.0 - percent.get(thumb)) * 100.0,
    }
}
