//! Domain bounds, the selected interval and its derived percentages.

use std::fmt;

use ranger_ui::CallbackWith;
use tracing::debug;

use super::{
    coerce::{NumericInput, coerce_number},
    error::RangeSliderError,
};

/// Upper limit on inferred decimal places. Steps finer than this still snap,
/// but stored values are only rounded to this many places.
pub const MAX_PRECISION: u32 = 15;

/// One edge of the selected interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Thumb {
    /// The lower edge.
    Min,
    /// The upper edge.
    Max,
}

impl Thumb {
    /// The other thumb.
    pub fn opposite(self) -> Self {
        match self {
            Self::Min => Self::Max,
            Self::Max => Self::Min,
        }
    }
}

/// The slider's domain.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Lowest selectable value.
    pub min: f64,
    /// Highest selectable value.
    pub max: f64,
    /// Snap granularity.
    pub step: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
        }
    }
}

impl Bounds {
    /// Creates validated bounds.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, RangeSliderError> {
        let bounds = Self { min, max, step };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Checks `min < max` and `step > 0`, all finite.
    pub fn validate(&self) -> Result<(), RangeSliderError> {
        if !self.min.is_finite() {
            return Err(RangeSliderError::NonFinite("min"));
        }
        if !self.max.is_finite() {
            return Err(RangeSliderError::NonFinite("max"));
        }
        if !self.step.is_finite() {
            return Err(RangeSliderError::NonFinite("step"));
        }
        if self.min >= self.max {
            return Err(RangeSliderError::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.step <= 0.0 {
            return Err(RangeSliderError::NonPositiveStep(self.step));
        }
        Ok(())
    }

    /// Whether [`Bounds::validate`] would succeed.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Fractional position of `value` in the domain, clamped to `[0, 1]`.
    /// An empty or inverted domain maps everything to `0`.
    pub fn percent_of(&self, value: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }

    /// The unsnapped value at a fractional position.
    pub fn value_at(&self, percent: f64) -> f64 {
        self.min + percent * self.span()
    }

    /// Snaps `raw` to the nearest step counted from `min`, then clamps into
    /// the domain.
    pub fn snap(&self, raw: f64) -> f64 {
        let snapped = ((raw - self.min) / self.step).round() * self.step + self.min;
        snapped.clamp(self.min, self.max)
    }

    /// Clamps `value` into the domain.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// A selected interval.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeValue {
    /// Lower edge.
    pub min: f64,
    /// Upper edge.
    pub max: f64,
}

impl RangeValue {
    /// Creates a new interval. No ordering is enforced.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The edge belonging to `thumb`.
    pub fn get(&self, thumb: Thumb) -> f64 {
        match thumb {
            Thumb::Min => self.min,
            Thumb::Max => self.max,
        }
    }

    /// Whether `min <= max`.
    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

/// Fractional positions of both thumbs along the track, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PercentValue {
    /// Position of the min thumb.
    pub min: f64,
    /// Position of the max thumb.
    pub max: f64,
}

impl Default for PercentValue {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl PercentValue {
    /// The position of `thumb`.
    pub fn get(&self, thumb: Thumb) -> f64 {
        match thumb {
            Thumb::Min => self.min,
            Thumb::Max => self.max,
        }
    }
}

/// Decimal places used when storing and displaying values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoundingPrecision(pub u32);

impl RoundingPrecision {
    /// Infers the precision from the digits after the decimal point in
    /// `step`'s shortest decimal representation. Integral steps give `0`.
    pub fn from_step(step: f64) -> Self {
        if step.fract() == 0.0 {
            return Self(0);
        }
        let text = step.to_string();
        let digits = text
            .split_once('.')
            .map_or(0, |(_, fraction)| fraction.len() as u32);
        Self(digits.min(MAX_PRECISION))
    }

    /// Number of decimal places.
    pub fn places(self) -> u32 {
        self.0
    }

    /// Rounds `value` to this many decimal places.
    pub fn round(self, value: f64) -> f64 {
        if self.0 == 0 {
            return value.round();
        }
        let factor = 10_f64.powi(self.0 as i32);
        (value * factor).round() / factor
    }

    /// Formats `value` with exactly this many decimal places.
    pub fn format(self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.0 as usize)
    }
}

/// A value prepared for display in a thumb label.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayValue {
    /// A plain number.
    Number(f64),
    /// Preformatted text.
    Text(String),
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for DisplayValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<String> for DisplayValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for DisplayValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct ThumbValue {
    value: Option<f64>,
    explicit: bool,
}

/// Owns the domain and the selected interval, and caches the derived
/// [`PercentValue`].
///
/// Setters never reject input: non-numeric values fall back to the previous
/// valid value. Ordering between the two values is not enforced here; the
/// interaction layer clamps one thumb against the other before storing.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueModel {
    bounds: Bounds,
    precision: RoundingPrecision,
    min_value: ThumbValue,
    max_value: ThumbValue,
    percent: PercentValue,
}

impl Default for ValueModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueModel {
    /// A model with default bounds `0..=100`, step `1`, and unset values.
    pub fn new() -> Self {
        Self {
            bounds: Bounds::default(),
            precision: RoundingPrecision(0),
            min_value: ThumbValue::default(),
            max_value: ThumbValue::default(),
            percent: PercentValue::default(),
        }
    }

    /// Current domain.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Current rounding precision.
    pub fn precision(&self) -> RoundingPrecision {
        self.precision
    }

    /// Cached thumb positions.
    pub fn percent(&self) -> PercentValue {
        self.percent
    }

    /// Sets the lower bound. An unset or never explicitly set min value
    /// follows the new bound.
    pub fn set_min(&mut self, value: impl NumericInput) {
        self.bounds.min = coerce_number(value, self.bounds.min, "min");
        if !self.min_value.explicit {
            self.min_value.value = Some(self.bounds.min);
        }
        self.recompute_percent_if_resolved();
    }

    /// Sets the upper bound. An unset or never explicitly set max value
    /// follows the new bound.
    pub fn set_max(&mut self, value: impl NumericInput) {
        self.bounds.max = coerce_number(value, self.bounds.max, "max");
        if !self.max_value.explicit {
            self.max_value.value = Some(self.bounds.max);
        }
        self.recompute_percent_if_resolved();
    }

    /// Sets the snap granularity and re-infers the rounding precision.
    /// Zero and negative steps are ignored.
    pub fn set_step(&mut self, value: impl NumericInput) {
        let step = coerce_number(value, self.bounds.step, "step");
        if step <= 0.0 {
            debug!(step, "ignoring non-positive step");
            return;
        }
        self.bounds.step = step;
        self.precision = RoundingPrecision::from_step(step);
    }

    /// The min value, or the lower bound while unset.
    pub fn min_value(&self) -> f64 {
        self.min_value.value.unwrap_or(self.bounds.min)
    }

    /// The max value, or the upper bound while unset.
    pub fn max_value(&self) -> f64 {
        self.max_value.value.unwrap_or(self.bounds.max)
    }

    /// The value of `thumb`.
    pub fn value(&self, thumb: Thumb) -> f64 {
        match thumb {
            Thumb::Min => self.min_value(),
            Thumb::Max => self.max_value(),
        }
    }

    /// The stored min value, `None` while unset.
    pub fn stored_min_value(&self) -> Option<f64> {
        self.min_value.value
    }

    /// The stored max value, `None` while unset.
    pub fn stored_max_value(&self) -> Option<f64> {
        self.max_value.value
    }

    /// Both values.
    pub fn range(&self) -> RangeValue {
        RangeValue::new(self.min_value(), self.max_value())
    }

    /// Whether both values hold a stored number.
    pub fn is_resolved(&self) -> bool {
        self.min_value.value.is_some() && self.max_value.value.is_some()
    }

    /// Materialises unset values from the bounds. Call once the
    /// configuration has been applied.
    pub fn resolve(&mut self) {
        if self.min_value.value.is_none() {
            self.min_value.value = Some(self.bounds.min);
        }
        if self.max_value.value.is_none() {
            self.max_value.value = Some(self.bounds.max);
        }
        self.recompute_percent();
    }

    /// Rounds and stores the min value. Returns whether the stored value
    /// changed.
    pub fn set_min_value(&mut self, value: impl NumericInput) -> bool {
        self.set_value(Thumb::Min, value)
    }

    /// Rounds and stores the max value. Returns whether the stored value
    /// changed.
    pub fn set_max_value(&mut self, value: impl NumericInput) -> bool {
        self.set_value(Thumb::Max, value)
    }

    /// Rounds and stores the value of `thumb`. Returns whether the stored
    /// value changed.
    pub fn set_value(&mut self, thumb: Thumb, value: impl NumericInput) -> bool {
        let current = self.value(thumb);
        let field = match thumb {
            Thumb::Min => "min_value",
            Thumb::Max => "max_value",
        };
        let rounded = self.precision.round(coerce_number(value, current, field));

        let slot = match thumb {
            Thumb::Min => &mut self.min_value,
            Thumb::Max => &mut self.max_value,
        };
        slot.explicit = true;
        if slot.value == Some(rounded) {
            return false;
        }
        slot.value = Some(rounded);
        self.recompute_percent();
        true
    }

    /// Whether both thumbs sit at the ends of the track.
    pub fn is_start_value(&self) -> bool {
        self.percent == PercentValue::default()
    }

    /// The label for `thumb`: `formatter` when given, otherwise the value
    /// with the rounding precision applied to non-integral numbers.
    pub fn display_value(
        &self,
        thumb: Thumb,
        formatter: Option<&CallbackWith<f64, DisplayValue>>,
    ) -> DisplayValue {
        let value = self.value(thumb);
        if let Some(formatter) = formatter {
            return formatter.call(value);
        }
        if self.precision.places() > 0 && value.fract() != 0.0 {
            return DisplayValue::Text(self.precision.format(value));
        }
        DisplayValue::Number(value)
    }

    fn recompute_percent_if_resolved(&mut self) {
        if self.is_resolved() {
            self.recompute_percent();
        }
    }

    fn recompute_percent(&mut self) {
        self.percent = PercentValue {
            min: self.bounds.percent_of(self.min_value()),
            max: self.bounds.percent_of(self.max_value()),
        };
    }
}
