//! Entry and exit points of a chain.
//!
//! - [`of`] / [`some`] lift plain values.
//! - [`try_to_result`] lifts a panicking computation into a `Result` tagged
//!   [`ErrorKind::Exception`](crate::ErrorKind::Exception); it is the single
//!   boundary between unwinding and result-style code.
//! - [`maybe_error`] and [`all_errors`] join independently computed results
//!   before their values are combined.
//!
//! # Examples
//!
//! ```
//! use status_rail::{chain, convert::maybe_error, of, Error, HasError, Result};
//!
//! fn divide_4_by(x: f64) -> Result<f64> {
//!     if x == 0.0 {
//!         return Err(Error::invalid_argument("divide by 0"));
//!     }
//!     Ok(4.0 / x)
//! }
//!
//! fn do_work() -> Result<f64> {
//!     let a = (chain(of(2.4)) | divide_4_by | divide_4_by).into_inner();
//!     let b = (chain(of(0.0)) | divide_4_by | divide_4_by).into_inner();
//!
//!     if let Some(error) = maybe_error(&[&a as &dyn HasError<Error>, &b]) {
//!         return Err(error);
//!     }
//!     Ok(a? + b?)
//! }
//!
//! assert_eq!(do_work(), Err(Error::invalid_argument("divide by 0")));
//! ```

#[cfg(feature = "std")]
use alloc::boxed::Box;
#[cfg(feature = "std")]
use alloc::string::{String, ToString};
#[cfg(feature = "std")]
use core::any::Any;

use crate::traits::HasError;
#[cfg(feature = "std")]
use crate::types::Error;
use crate::types::{ErrorVec, Result};

/// Wraps a value as a successful [`Result`].
///
/// # Examples
///
/// ```
/// use status_rail::{of, Result};
///
/// let r: Result<i32> = of(4);
/// assert_eq!(r, Ok(4));
/// ```
#[inline]
pub fn of<T>(value: T) -> Result<T> {
    Ok(value)
}

/// Wraps a value as a present `Option`.
#[inline]
pub fn some<T>(value: T) -> Option<T> {
    Some(value)
}

/// Opaque payload of a captured panic.
#[cfg(feature = "std")]
pub type PanicPayload = Box<dyn Any + Send + 'static>;

/// Runs `f`, capturing a panic as its opaque payload instead of unwinding.
///
/// This is the lower-level form of [`try_to_result`]; use it when the payload
/// itself must be inspected or resumed later.
///
/// The process panic hook still runs, so the default hook prints the panic
/// message to stderr.
///
/// # Errors
///
/// Returns the panic payload if `f` panics.
#[cfg(feature = "std")]
pub fn try_catch<T, F>(f: F) -> Result<T, PanicPayload>
where
    F: FnOnce() -> T,
{
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(f))
}

/// Runs `f`, converting a panic into an
/// [`ErrorKind::Exception`](crate::ErrorKind::Exception) error.
///
/// The detail is the panic message when the payload is a `&str` or `String`,
/// and `"unknown panic"` otherwise. Never re-raises.
///
/// # Errors
///
/// Returns an `Exception` error if `f` panics.
///
/// # Examples
///
/// ```
/// use status_rail::{try_to_result, ErrorKind};
///
/// let ok = try_to_result(|| 0);
/// assert_eq!(ok, Ok(0));
///
/// let failed = try_to_result(|| -> i32 { panic!("divide by zero") });
/// let error = failed.unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::Exception);
/// assert_eq!(error.detail(), "divide by zero");
/// ```
#[cfg(feature = "std")]
pub fn try_to_result<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> T,
{
    try_catch(f).map_err(|payload| Error::exception(panic_message(payload.as_ref())))
}

/// Renders a panic payload as text.
#[cfg(feature = "std")]
#[must_use]
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Returns `true` if `result` holds an error.
#[inline]
pub fn has_error<T, E>(result: &Result<T, E>) -> bool {
    result.is_err()
}

/// Returns the first error among `results`, scanning left to right.
///
/// Stops at the first failure. Returns `None` when every result succeeded.
/// For results that are not yet borrowed as trait objects, the
/// [`maybe_error!`](crate::maybe_error) macro is more convenient.
///
/// # Examples
///
/// ```
/// use status_rail::{convert::maybe_error, Error, HasError, Result};
///
/// let a: Result<f64> = Ok(6.5);
/// let b: Result<i32> = Err(Error::unknown("first"));
/// let c: Result<i32> = Err(Error::timeout("second"));
///
/// let found = maybe_error(&[&a as &dyn HasError<Error>, &b, &c]);
/// assert_eq!(found, Some(Error::unknown("first")));
/// ```
pub fn maybe_error<E: Clone>(results: &[&dyn HasError<E>]) -> Option<E> {
    results.iter().find_map(|result| result.error()).cloned()
}

/// Collects every error among `results`, in order.
///
/// Unlike [`maybe_error`] this does not stop at the first failure.
///
/// # Examples
///
/// ```
/// use status_rail::{convert::all_errors, Error, HasError, Result};
///
/// let a: Result<u8> = Err(Error::aborted("a"));
/// let b: Result<()> = Ok(());
/// let c: Result<u8> = Err(Error::internal("c"));
///
/// let errors = all_errors(&[&a as &dyn HasError<Error>, &b, &c]);
/// assert_eq!(errors.as_slice(), &[Error::aborted("a"), Error::internal("c")]);
/// ```
pub fn all_errors<E: Clone>(results: &[&dyn HasError<E>]) -> ErrorVec<E> {
    results.iter().filter_map(|result| result.error()).cloned().collect()
}
