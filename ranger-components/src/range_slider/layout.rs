use ranger_ui::{LayoutBox, Px, TrackElement};

/// Pixel origin and length of the draggable track.
///
/// Captured from the host's layout box on focus, hover and drag start, and
/// kept until the next capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackGeometry {
    /// Left edge of the track.
    pub offset: Px,
    /// Track length.
    pub length: Px,
}

impl TrackGeometry {
    /// Creates a new geometry.
    pub const fn new(offset: Px, length: Px) -> Self {
        Self { offset, length }
    }

    /// Reads the current layout box of `element`.
    pub fn capture(element: &dyn TrackElement) -> Option<Self> {
        element.layout_box().map(Self::from)
    }

    /// Fractional position of pointer coordinate `x` along the track,
    /// clamped to `[0, 1]`. `None` for a track without length.
    pub fn fraction_at(&self, x: Px) -> Option<f64> {
        if self.length.0 <= 0 {
            return None;
        }
        let fraction = (x.to_f64() - self.offset.to_f64()) / self.length.to_f64();
        Some(fraction.clamp(0.0, 1.0))
    }

    /// Pixel coordinate at fractional position `fraction`.
    pub fn position_at(&self, fraction: f64) -> Px {
        let offset = fraction.clamp(0.0, 1.0) * self.length.to_f64();
        self.offset.saturating_add(Px::round_from_f64(offset))
    }
}

impl From<LayoutBox> for TrackGeometry {
    fn from(layout: LayoutBox) -> Self {
        Self::new(layout.left, layout.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_is_clamped_to_track() {
        let geometry = TrackGeometry::new(Px(100), Px(200));
        assert_eq!(geometry.fraction_at(Px(100)), Some(0.0));
        assert_eq!(geometry.fraction_at(Px(200)), Some(0.5));
        assert_eq!(geometry.fraction_at(Px(300)), Some(1.0));
        assert_eq!(geometry.fraction_at(Px(-40)), Some(0.0));
        assert_eq!(geometry.fraction_at(Px(1000)), Some(1.0));
    }

    #[test]
    fn extreme_pointer_coordinates_clamp() {
        let geometry = TrackGeometry::new(Px(100), Px(100));
        assert_eq!(geometry.fraction_at(Px(i32::MIN)), Some(0.0));
        assert_eq!(geometry.fraction_at(Px(i32::MAX)), Some(1.0));

        let far_left = TrackGeometry::new(Px(i32::MIN), Px(100));
        assert_eq!(far_left.fraction_at(Px(i32::MAX)), Some(1.0));
    }

    #[test]
    fn zero_length_track_has_no_fraction() {
        assert_eq!(TrackGeometry::new(Px(10), Px(0)).fraction_at(Px(10)), None);
        assert_eq!(TrackGeometry::new(Px(10), Px(-5)).fraction_at(Px(10)), None);
    }

    #[test]
    fn position_is_inverse_of_fraction() {
        let geometry = TrackGeometry::new(Px(100), Px(200));
        assert_eq!(geometry.position_at(0.25), Px(150));
        assert_eq!(geometry.position_at(1.5), Px(300));
    }

    #[test]
    fn capture_reads_layout_box() {
        let layout = LayoutBox::new(Px(8), Px(64));
        assert_eq!(
            TrackGeometry::capture(&layout),
            Some(TrackGeometry::new(Px(8), Px(64)))
        );
    }
}
