use ranger_ui::Px;

use super::{
    layout::TrackGeometry,
    value_model::{Bounds, RangeValue, Thumb, ValueModel},
};

/// Where a range slider is in a pointer gesture.
///
/// ```text
/// Idle --thumb pointer-down--> Selecting(thumb) --slide start--> Sliding --release--> Idle
/// Idle --track click--> (resolve once) --> Idle
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum InteractionState {
    /// No gesture in progress and no thumb pinned.
    #[default]
    Idle,
    /// A thumb was targeted by a pointer-down but no drag has started.
    Selecting(Thumb),
    /// A drag is in progress.
    Sliding {
        /// The thumb being dragged. `None` until the first pointer position
        /// picks the nearest thumb.
        thumb: Option<Thumb>,
        /// The interval when the drag started.
        origin: RangeValue,
    },
}

impl InteractionState {
    /// The thumb the current gesture acts on, if any.
    pub fn pinned_thumb(&self) -> Option<Thumb> {
        match *self {
            Self::Idle => None,
            Self::Selecting(thumb) => Some(thumb),
            Self::Sliding { thumb, .. } => thumb,
        }
    }

    /// Whether a drag is in progress.
    pub fn is_sliding(&self) -> bool {
        matches!(self, Self::Sliding { .. })
    }
}

/// Maps a track fraction to a value: exact bounds at the ends, otherwise
/// the raw value snapped to the nearest step and clamped into the domain.
pub(super) fn value_from_fraction(fraction: f64, bounds: &Bounds) -> f64 {
    if fraction <= 0.0 {
        bounds.min
    } else if fraction >= 1.0 {
        bounds.max
    } else {
        bounds.snap(bounds.value_at(fraction))
    }
}

/// Keeps `thumb` from crossing the other one by clamping, never swapping.
pub(super) fn guard_ordering(thumb: Thumb, value: f64, current: RangeValue) -> f64 {
    let other = current.get(thumb.opposite());
    match thumb {
        Thumb::Min => value.min(other),
        Thumb::Max => value.max(other),
    }
}

/// Resolves pointer coordinate `x` into the value `thumb` should take.
///
/// Returns `None` when there is nothing to resolve against: no geometry, a
/// track without length, or an invalid domain.
pub(super) fn resolve_position(
    thumb: Thumb,
    x: Px,
    geometry: Option<TrackGeometry>,
    model: &ValueModel,
) -> Option<f64> {
    let bounds = model.bounds();
    if !bounds.is_valid() {
        return None;
    }
    let fraction = geometry?.fraction_at(x)?;
    let value = value_from_fraction(fraction, &bounds);
    Some(guard_ordering(thumb, value, model.range()))
}

/// Picks the thumb closest to pointer coordinate `x`.
///
/// Distances are compared in value space using the unsnapped pointer value.
/// Ties go to the min thumb, except when the pointer lies above the max
/// thumb, which can only happen when both thumbs sit on the same value.
pub(super) fn nearest_thumb(
    x: Px,
    geometry: Option<TrackGeometry>,
    model: &ValueModel,
) -> Option<Thumb> {
    let fraction = geometry?.fraction_at(x)?;
    let pointer = model.bounds().value_at(fraction);
    let range = model.range();
    let to_min = (pointer - range.min).abs();
    let to_max = (pointer - range.max).abs();

    let thumb = if to_min < to_max {
        Thumb::Min
    } else if to_max < to_min || pointer > range.max {
        Thumb::Max
    } else {
        Thumb::Min
    };
    Some(thumb)
}
