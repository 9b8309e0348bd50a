//! Textual forms of [`Result`](crate::types::Result).
//!
//! `Result` is a foreign type, so it cannot implement `Display` here. The
//! [`ResultDisplay`] adapter borrows a result and renders it as
//! `"[Result: value=<value>]"` or `"[Result: [Error: [<Kind>] <detail>]]"`.
//! Log scrapers match on this exact shape.

use core::fmt::{self, Display};

use crate::types::Error;

/// Borrowing `Display` adapter for `Result<T, Error>`.
///
/// Created by [`DisplayResult::display`].
///
/// # Examples
///
/// ```
/// use status_rail::{DisplayResult, Error, Result};
///
/// let ok: Result<i32> = Ok(4);
/// assert_eq!(ok.display().to_string(), "[Result: value=4]");
///
/// let err: Result<i32> = Err(Error::data_loss("disk"));
/// assert_eq!(err.display().to_string(), "[Result: [Error: [DataLoss] disk]]");
/// ```
#[must_use]
#[derive(Debug)]
pub struct ResultDisplay<'a, T> {
    result: &'a Result<T, Error>,
}

impl<'a, T> ResultDisplay<'a, T> {
    /// Wraps a borrowed result.
    #[inline]
    pub fn new(result: &'a Result<T, Error>) -> Self {
        Self { result }
    }
}

impl<T: Display> Display for ResultDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.result {
            Ok(value) => write!(f, "[Result: value={}]", value),
            Err(error) => write!(f, "[Result: {}]", error),
        }
    }
}

/// Extension trait giving `Result<T, Error>` a `display()` method.
pub trait DisplayResult<T> {
    /// Returns a `Display` adapter for this result.
    fn display(&self) -> ResultDisplay<'_, T>;
}

impl<T> DisplayResult<T> for Result<T, Error> {
    #[inline]
    fn display(&self) -> ResultDisplay<'_, T> {
        ResultDisplay::new(self)
    }
}
