//! Physical pixel coordinates.
//!
//! Pointer positions and layout boxes are delivered by the host in physical
//! pixels, X increasing to the right. Negative coordinates are valid: a
//! pointer dragged past the left edge of the window still reports a
//! position. Widgets convert to `f64` before doing any value-domain math, so
//! coordinates anywhere in the `i32` range are safe to forward.
//!
//! # Example
//!
//! ```
//! use ranger_ui::px::{Px, PxPosition};
//!
//! let pointer = PxPosition::new(Px(120), Px(8));
//! let track_left = Px(20);
//!
//! assert_eq!(pointer.x.to_f64() - track_left.to_f64(), 100.0);
//! assert_eq!(track_left.saturating_add(Px(i32::MAX)), Px(i32::MAX));
//! ```

/// A physical pixel coordinate value.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// Converts to `f64`.
    pub fn to_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Adds `rhs`, saturating at the bounds of `i32`.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Px(self.0.saturating_add(rhs.0))
    }

    /// Rounds `value` to the nearest pixel, saturating at the bounds of
    /// `i32`. `NaN` maps to zero.
    pub fn round_from_f64(value: f64) -> Self {
        // Float-to-int `as` saturates and maps NaN to 0.
        Px(value.round() as i32)
    }
}

/// A pointer position in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxPosition {
    /// The x-coordinate.
    pub x: Px,
    /// The y-coordinate.
    pub y: Px,
}

impl PxPosition {
    /// Creates a new position from x and y coordinates.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturating_add_stops_at_bounds() {
        assert_eq!(Px(10).saturating_add(Px(5)), Px(15));
        assert_eq!(Px(i32::MAX).saturating_add(Px(1)), Px(i32::MAX));
        assert_eq!(Px(i32::MIN).saturating_add(Px(-1)), Px(i32::MIN));
    }

    #[test]
    fn round_from_f64_saturates() {
        assert_eq!(Px::round_from_f64(100.4), Px(100));
        assert_eq!(Px::round_from_f64(100.7), Px(101));
        assert_eq!(Px::round_from_f64(-100.5), Px(-101));
        assert_eq!(Px::round_from_f64(f64::MAX), Px(i32::MAX));
        assert_eq!(Px::round_from_f64(f64::MIN), Px(i32::MIN));
        assert_eq!(Px::round_from_f64(f64::NAN), Px(0));
    }

    #[test]
    fn extreme_coordinates_convert_exactly() {
        assert_eq!(Px(i32::MIN).to_f64(), -2_147_483_648.0);
        assert_eq!(Px(i32::MAX).to_f64() - Px(i32::MIN).to_f64(), 4_294_967_295.0);
    }
}
