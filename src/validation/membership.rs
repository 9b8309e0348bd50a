use alloc::format;
use alloc::vec::Vec;
use core::fmt::{self, Debug, Display};

use crate::types::{Error, Result};
use crate::validation::traits::Validator;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Succeeds with `value` iff it is contained in `valid_values`.
///
/// Containment is order independent. On failure the detail lists the rejected
/// value and every valid value: `"z is not in {\"a\", \"b\", \"c\"}"`.
///
/// # Errors
///
/// Returns an [`ErrorKind::OutOfRange`](crate::ErrorKind::OutOfRange) error
/// when `value` is not a member.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use status_rail::{validate_in, ErrorKind};
///
/// let valid = BTreeSet::from(["a", "b", "c"]);
/// assert_eq!(validate_in(&valid, "a"), Ok("a"));
///
/// let error = validate_in(&valid, "z").unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::OutOfRange);
/// assert_eq!(error.detail(), r#"z is not in {"a", "b", "c"}"#);
/// ```
pub fn validate_in<'a, V, T, I>(valid_values: I, value: T) -> Result<T>
where
    I: IntoIterator<Item = &'a V> + Clone,
    V: PartialEq<T> + Debug + 'a,
    T: Display,
{
    if valid_values.clone().into_iter().any(|valid| *valid == value) {
        return Ok(value);
    }
    Err(Error::out_of_range(format!("{} is not in {}", value, SetDisplay(valid_values))))
}

/// Renders values as `{v1, v2, ...}` using their `Debug` form.
struct SetDisplay<I>(I);

impl<'a, V, I> Display for SetDisplay<I>
where
    I: IntoIterator<Item = &'a V> + Clone,
    V: Debug + 'a,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, value) in self.0.clone().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}", value)?;
        }
        f.write_str("}")
    }
}

/// Owned membership validator built by [`one_of`].
///
/// # Examples
///
/// ```
/// use status_rail::{one_of, Validator};
///
/// let mode = one_of(["fast", "safe"]);
/// assert_eq!(mode.validate("safe"), Ok("safe"));
/// assert!(mode.validate("turbo").is_err());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOf<V> {
    valid_values: Vec<V>,
}

impl<V> OneOf<V> {
    /// Returns the accepted values.
    #[must_use]
    #[inline]
    pub fn valid_values(&self) -> &[V] {
        &self.valid_values
    }
}

/// Builds a validator accepting only the given values.
#[inline]
pub fn one_of<V, I>(valid_values: I) -> OneOf<V>
where
    I: IntoIterator<Item = V>,
{
    OneOf { valid_values: valid_values.into_iter().collect() }
}

impl<V, T> Validator<T> for OneOf<V>
where
    V: PartialEq<T> + Debug,
    T: Display,
{
    #[inline]
    fn validate(&self, value: T) -> Result<T> {
        validate_in(&self.valid_values, value)
    }
}
