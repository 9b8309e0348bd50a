use alloc::format;

use crate::types::{Error, Result};
use crate::validation::traits::{RangeValue, Validator};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default maximum distance, in steps, from the nearest valid step.
pub const DEFAULT_STEP_TOLERANCE: f64 = 1e-3;

/// Inclusive numeric range with an optional step grid.
///
/// `validate(value)` applies, in order:
///
/// 1. `value < from || value > to` fails with
///    [`ErrorKind::OutOfRange`](crate::ErrorKind::OutOfRange).
/// 2. If a step is set, `ratio = (value - from) / step` is computed in `f64`;
///    when `|ratio - round(ratio)|` exceeds the step tolerance the value fails
///    with `OutOfRange`.
/// 3. Otherwise the value is returned unchanged.
///
/// Unset ends default to the type's representable minimum and maximum. With
/// `from` unset the step grid is anchored at zero.
///
/// # Examples
///
/// ```
/// use status_rail::{ErrorKind, Range, Validator};
///
/// let from_minus_10 = Range::new().from(-10);
/// assert_eq!(from_minus_10.validate(14), Ok(14));
/// assert_eq!(from_minus_10.validate(-100).unwrap_err().kind(), ErrorKind::OutOfRange);
///
/// let every_third = Range::new().from(0).step(3);
/// assert!(every_third.validate(12).is_ok());
/// assert!(every_third.validate(14).is_err());
///
/// let even = Range::<f64>::new().step(2.0);
/// assert!(even.validate(4.0).is_ok());
/// assert!(even.validate(5.0).is_err());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range<T> {
    #[cfg_attr(feature = "serde", serde(default))]
    from: Option<T>,
    #[cfg_attr(feature = "serde", serde(default))]
    to: Option<T>,
    #[cfg_attr(feature = "serde", serde(default))]
    step: Option<T>,
    #[cfg_attr(feature = "serde", serde(default = "default_step_tolerance"))]
    step_tolerance: f64,
}

#[cfg(feature = "serde")]
fn default_step_tolerance() -> f64 {
    DEFAULT_STEP_TOLERANCE
}

impl<T: RangeValue> Range<T> {
    /// Creates an unbounded range without a step.
    #[inline]
    pub fn new() -> Self {
        Self { from: None, to: None, step: None, step_tolerance: DEFAULT_STEP_TOLERANCE }
    }

    /// Creates the inclusive range `[from, to]`.
    #[inline]
    pub fn between(from: T, to: T) -> Self {
        Self::new().from(from).to(to)
    }

    /// Sets the inclusive lower bound.
    #[inline]
    pub fn from(mut self, from: T) -> Self {
        self.from = Some(from);
        self
    }

    /// Sets the inclusive upper bound.
    #[inline]
    pub fn to(mut self, to: T) -> Self {
        self.to = Some(to);
        self
    }

    /// Requires values to lie on the grid `from + k * step`.
    #[inline]
    pub fn step(mut self, step: T) -> Self {
        self.step = Some(step);
        self
    }

    /// Overrides how far, in steps, a value may sit from the grid.
    #[inline]
    pub fn step_tolerance(mut self, tolerance: f64) -> Self {
        self.step_tolerance = tolerance;
        self
    }

    /// Effective lower bound.
    #[must_use]
    #[inline]
    pub fn lower(&self) -> T {
        self.from.unwrap_or(T::MIN)
    }

    /// Effective upper bound.
    #[must_use]
    #[inline]
    pub fn upper(&self) -> T {
        self.to.unwrap_or(T::MAX)
    }

    /// Configured step, if any.
    #[must_use]
    #[inline]
    pub fn step_size(&self) -> Option<T> {
        self.step
    }

    /// Configured step tolerance.
    #[must_use]
    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.step_tolerance
    }

    /// Borrows the range as a plain fallible function, for use with
    /// [`chain`](crate::chain) and [`bind`](crate::bind).
    ///
    /// ```
    /// use status_rail::{chain, of, Range};
    ///
    /// let percent = Range::between(0, 100);
    /// let doubled = chain(of(40)) | percent.as_fn() | (|x: i32| Ok(x * 2)) | percent.as_fn();
    /// assert_eq!(doubled.into_inner(), Ok(80));
    /// ```
    #[inline]
    pub fn as_fn(&self) -> impl Fn(T) -> Result<T> + '_ {
        move |value| self.check(value)
    }

    fn check(&self, value: T) -> Result<T> {
        let (from, to) = (self.lower(), self.upper());
        if value < from || value > to {
            return Err(Error::out_of_range(format!(
                "{} is outside of the range [{}, {}]",
                value, from, to
            )));
        }

        if let Some(step) = self.step {
            let origin = self.from.unwrap_or(T::ZERO);
            // NOTE: precision degrades once |value - origin| / step approaches 2^53.
            let ratio = (value.to_f64() - origin.to_f64()) / step.to_f64();
            let distance = distance_to_nearest_integer(ratio);
            if distance > self.step_tolerance {
                return Err(Error::out_of_range(format!(
                    "{} is {} away from the nearest valid step",
                    value, distance
                )));
            }
        }

        Ok(value)
    }
}

#[cfg(feature = "std")]
#[inline]
fn distance_to_nearest_integer(ratio: f64) -> f64 {
    (ratio - ratio.round()).abs()
}

#[cfg(not(feature = "std"))]
fn distance_to_nearest_integer(ratio: f64) -> f64 {
    // Every f64 at or above 2^52 is already an integer.
    const INTEGRAL_FROM: f64 = 4_503_599_627_370_496.0;

    let magnitude = if ratio < 0.0 { -ratio } else { ratio };
    if !(magnitude < INTEGRAL_FROM) {
        // 0 for large finite values, NaN for infinities and NaN.
        return ratio - ratio;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    let fraction = magnitude - (magnitude as u64) as f64;
    if fraction > 0.5 {
        1.0 - fraction
    } else {
        fraction
    }
}

impl<T: RangeValue> Default for Range<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RangeValue> Validator<T> for Range<T> {
    #[inline]
    fn validate(&self, value: T) -> Result<T> {
        self.check(value)
    }
}
