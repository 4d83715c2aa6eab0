//! Numeric input coercion.
//!
//! Hosts frequently forward configuration as loosely typed values: form
//! fields, attributes, optional JSON numbers. Setters accept anything that
//! implements [`NumericInput`] and fall back to the previous valid value
//! when the input is not a finite number.

use tracing::debug;

/// A value that may or may not hold a finite number.
pub trait NumericInput {
    /// Returns the number, or `None` when the input is missing or not a
    /// finite number.
    fn to_number(&self) -> Option<f64>;
}

impl NumericInput for f64 {
    fn to_number(&self) -> Option<f64> {
        self.is_finite().then_some(*self)
    }
}

impl NumericInput for f32 {
    fn to_number(&self) -> Option<f64> {
        f64::from(*self).to_number()
    }
}

macro_rules! impl_numeric_input_for_int {
    ($($ty:ty),*) => {
        $(
            impl NumericInput for $ty {
                fn to_number(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl_numeric_input_for_int!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

impl NumericInput for str {
    fn to_number(&self) -> Option<f64> {
        self.trim().parse::<f64>().ok().and_then(|v| v.to_number())
    }
}

impl NumericInput for String {
    fn to_number(&self) -> Option<f64> {
        self.as_str().to_number()
    }
}

impl<T: NumericInput + ?Sized> NumericInput for &T {
    fn to_number(&self) -> Option<f64> {
        (**self).to_number()
    }
}

impl<T: NumericInput> NumericInput for Option<T> {
    fn to_number(&self) -> Option<f64> {
        self.as_ref().and_then(NumericInput::to_number)
    }
}

/// Returns the number held by `input`, or `fallback` if there is none.
pub(crate) fn coerce_number(input: impl NumericInput, fallback: f64, field: &'static str) -> f64 {
    match input.to_number() {
        Some(value) => value,
        None => {
            debug!(field, fallback, "ignoring non-numeric input");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_numbers_pass_through() {
        assert_eq!(coerce_number(4.5, 1.0, "test"), 4.5);
        assert_eq!(coerce_number(7_u8, 1.0, "test"), 7.0);
        assert_eq!(coerce_number(-3_i64, 1.0, "test"), -3.0);
        assert_eq!(coerce_number(0.25_f32, 1.0, "test"), 0.25);
    }

    #[test]
    fn invalid_numbers_fall_back() {
        assert_eq!(coerce_number(f64::NAN, 1.0, "test"), 1.0);
        assert_eq!(coerce_number(f64::INFINITY, 1.0, "test"), 1.0);
        assert_eq!(coerce_number(None::<f64>, 2.0, "test"), 2.0);
    }

    #[test]
    fn strings_are_parsed() {
        assert_eq!(coerce_number(" 12.5 ", 0.0, "test"), 12.5);
        assert_eq!(coerce_number(String::from("3"), 0.0, "test"), 3.0);
        assert_eq!(coerce_number("twelve", 9.0, "test"), 9.0);
        assert_eq!(coerce_number("inf", 9.0, "test"), 9.0);
        assert_eq!(coerce_number(Some("8"), 0.0, "test"), 8.0);
    }
}
