/// Object-safe view of "a result that may hold an `E`".
///
/// Lets results with different success types sit side by side in one slice,
/// which is what [`maybe_error`](crate::convert::maybe_error) and
/// [`all_errors`](crate::convert::all_errors) scan.
///
/// # Examples
///
/// ```
/// use status_rail::{Error, HasError, Result};
///
/// let a: Result<f64> = Ok(6.5);
/// let b: Result<&str> = Err(Error::unknown(""));
///
/// let results: [&dyn HasError<Error>; 2] = [&a, &b];
/// assert!(results[0].error().is_none());
/// assert!(results[1].error().is_some());
/// ```
pub trait HasError<E> {
    /// Returns the error, if any.
    fn error(&self) -> Option<&E>;

    /// Returns `true` if an error is present.
    #[inline]
    fn has_error(&self) -> bool {
        self.error().is_some()
    }
}

impl<T, E> HasError<E> for Result<T, E> {
    #[inline]
    fn error(&self) -> Option<&E> {
        self.as_ref().err()
    }
}

impl<E, H: HasError<E> + ?Sized> HasError<E> for &H {
    #[inline]
    fn error(&self) -> Option<&E> {
        (**self).error()
    }
}
