use core::fmt::{Debug, Display};

use crate::traits::ResultExt;
use crate::types::Result;

/// A fallible check that returns its input unchanged on success.
///
/// Validators plug into a chain like any other fallible function, see
/// [`Range::as_fn`](crate::validation::Range::as_fn). Every
/// `Fn(T) -> Result<T>` closure is a validator too.
///
/// # Examples
///
/// ```
/// use status_rail::{Error, Result, Validator};
///
/// let even = |x: i32| -> Result<i32> {
///     if x % 2 == 0 { Ok(x) } else { Err(Error::out_of_range(format!("{x} is odd"))) }
/// };
///
/// assert_eq!(even.validate(4), Ok(4));
/// assert_eq!(
///     even.validate_named(3, "count").unwrap_err().detail(),
///     "count: 3 is odd"
/// );
/// ```
pub trait Validator<T> {
    /// Checks `value`, returning it unchanged when it passes.
    ///
    /// # Errors
    ///
    /// Returns an error describing why `value` was rejected.
    fn validate(&self, value: T) -> Result<T>;

    /// Checks `value` and attributes a failure to the parameter `name`.
    ///
    /// # Errors
    ///
    /// Returns the [`validate`](Self::validate) error with its detail
    /// prefixed by `"{name}: "`.
    #[inline]
    fn validate_named(&self, value: T, name: impl Display) -> Result<T> {
        self.validate(value).named(name)
    }
}

impl<T, F> Validator<T> for F
where
    F: Fn(T) -> Result<T>,
{
    #[inline]
    fn validate(&self, value: T) -> Result<T> {
        self(value)
    }
}

/// Ordered numeric types accepted by [`Range`](crate::validation::Range).
///
/// Provides the representable bounds used for unset range ends, a zero used
/// as the step origin, and a lossy conversion to `f64` for the step check.
pub trait RangeValue: Copy + PartialOrd + Display + Debug {
    /// Smallest representable value.
    const MIN: Self;
    /// Largest representable value.
    const MAX: Self;
    /// Additive identity.
    const ZERO: Self;

    /// Converts to `f64`, rounding for wide integers.
    fn to_f64(self) -> f64;
}

macro_rules! impl_range_value {
    ($zero:literal => $($ty:ty),* $(,)?) => {
        $(
            impl RangeValue for $ty {
                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;
                const ZERO: Self = $zero;

                #[inline]
                #[allow(
                    clippy::cast_precision_loss,
                    clippy::cast_lossless,
                    clippy::unnecessary_cast
                )]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_range_value!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_range_value!(0.0 => f32, f64);
