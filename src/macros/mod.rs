//! Variadic helpers that plain functions cannot express.
//!
//! - [`macro@crate::compose`] - folds any number of fallible functions into one.
//! - [`macro@crate::maybe_error`] - finds the first error among results with
//!   different success types, evaluating them lazily left to right.
//! - [`macro@crate::all_errors`] - gathers every error among such results.
//!
//! # Examples
//!
//! ```
//! use status_rail::{bind, chain, compose, of, Error, Result};
//!
//! fn divide_4_by(x: f64) -> Result<f64> {
//!     if x == 0.0 {
//!         return Err(Error::invalid_argument("divide by 0"));
//!     }
//!     Ok(4.0 / x)
//! }
//!
//! fn safe_sqrt(x: f64) -> Result<f64> {
//!     if x < 0.0 {
//!         return Err(Error::invalid_argument(format!("sqrt of value < 0.0 is undefined: {x}")));
//!     }
//!     Ok(x.sqrt())
//! }
//!
//! let composed = bind(of(1.0), compose!(divide_4_by, safe_sqrt));
//! let chained = (chain(of(1.0)) | divide_4_by | safe_sqrt).into_inner();
//! assert_eq!(composed, chained);
//! assert_eq!(composed, Ok(2.0));
//! ```

/// Composes fallible functions left to right.
///
/// `compose!(f1, f2, ..., fn)` returns a function equivalent to
/// `|x| bind(...bind(bind(f1(x), f2)...), fn)`. With a single argument the
/// function is returned unchanged.
///
/// Works for any [`Bind`](crate::traits::Bind) container, so `Option`
/// pipelines compose the same way:
///
/// ```
/// use status_rail::compose;
///
/// fn non_zero(x: i32) -> Option<i32> { (x != 0).then_some(x) }
/// fn lt_3_round(x: f64) -> Option<i32> { (x < 3.0).then(|| x.round() as i32) }
///
/// let f = compose!(lt_3_round, non_zero, non_zero);
/// assert_eq!(f(-4.0), Some(-4));
/// assert_eq!(f(0.1), None);
/// ```
#[macro_export]
macro_rules! compose {
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $g:expr $(, $rest:expr)* $(,)?) => {
        $crate::compose!($crate::traits::bind::compose($f, $g) $(, $rest)*)
    };
}

/// Returns the first error among the given results, or `None`.
///
/// The results may have different success types but must share the error
/// type. Arguments are evaluated left to right and evaluation stops at the
/// first failure.
///
/// ```
/// use status_rail::{maybe_error, Error, Result};
///
/// let a: Result<f64> = Ok(6.5);
/// let b: Result<i32> = Err(Error::unknown(""));
///
/// assert_eq!(maybe_error!(a, b), Some(Error::unknown("")));
/// assert_eq!(maybe_error!(a, Ok::<_, Error>("fine")), None);
/// ```
#[macro_export]
macro_rules! maybe_error {
    ($($result:expr),+ $(,)?) => {
        ::core::option::Option::None
            $(.or_else(|| $crate::traits::HasError::error(&$result).cloned()))+
    };
}

/// Collects every error among the given results into an
/// [`ErrorVec`](crate::types::ErrorVec), in argument order.
///
/// ```
/// use status_rail::{all_errors, Error, Result};
///
/// let a: Result<u8> = Err(Error::aborted("a"));
/// let b: Result<&str> = Ok("b");
/// let c: Result<u8> = Err(Error::internal("c"));
///
/// let errors = all_errors!(a, b, c);
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors[1], Error::internal("c"));
/// ```
#[macro_export]
macro_rules! all_errors {
    ($($result:expr),+ $(,)?) => {{
        let mut errors = $crate::types::ErrorVec::<_>::new();
        $(
            if let ::core::option::Option::Some(error) = $crate::traits::HasError::error(&$result) {
                errors.push(::core::clone::Clone::clone(error));
            }
        )+
        errors
    }};
}
