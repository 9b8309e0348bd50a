//! Extension methods for `Result<T, Error>`.
//!
//! # Examples
//!
//! ```
//! use status_rail::{Range, ResultExt, Validator};
//!
//! let port = Range::between(1u16, 1024).validate(8080).named("port");
//! assert_eq!(
//!     port.unwrap_err().detail(),
//!     "port: 8080 is outside of the range [1, 1024]"
//! );
//! ```

use core::fmt::Display;

use crate::types::{Error, ErrorKind};

/// Extension trait for attributing and inspecting `Result<T, Error>` failures.
pub trait ResultExt<T> {
    /// Prefixes the error detail with `"{name}: "`, keeping the kind.
    ///
    /// Success values pass through untouched.
    fn named(self, name: impl Display) -> Result<T, Error>;

    /// Like [`named`](Self::named), but only builds the name on failure.
    fn named_with<N, F>(self, f: F) -> Result<T, Error>
    where
        N: Display,
        F: FnOnce() -> N;

    /// Returns `true` if the result failed with an error of the given kind.
    fn is_err_kind(&self, kind: ErrorKind) -> bool;
}

impl<T> ResultExt<T> for Result<T, Error> {
    #[inline]
    fn named(self, name: impl Display) -> Result<T, Error> {
        self.map_err(|e| e.with_name(name))
    }

    #[inline]
    fn named_with<N, F>(self, f: F) -> Result<T, Error>
    where
        N: Display,
        F: FnOnce() -> N,
    {
        self.map_err(|e| e.with_name(f()))
    }

    #[inline]
    fn is_err_kind(&self, kind: ErrorKind) -> bool {
        matches!(self, Err(e) if e.kind() == kind)
    }
}
