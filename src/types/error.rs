use alloc::format;
use alloc::string::String;
use core::fmt::{self, Display};

use crate::types::ErrorKind;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Flat, status-style error: one [`ErrorKind`] plus a free-text detail.
///
/// Two errors are equal iff both the kind and the detail are equal. An error
/// whose kind is [`ErrorKind::Ok`] is a success marker, which lets an `Error`
/// stand on its own as an optional status without a surrounding `Result`.
///
/// `Error` is an immutable value: fields are private and every "modifier"
/// returns a new value.
///
/// # Examples
///
/// ```
/// use status_rail::{Error, ErrorKind};
///
/// let err = Error::not_found("user 42");
/// assert_eq!(err.kind(), ErrorKind::NotFound);
/// assert_eq!(err.detail(), "user 42");
/// assert!(!err.is_ok());
/// assert_eq!(err.to_string(), "[Error: [NotFound] user 42]");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Error {
    kind: ErrorKind,
    detail: String,
}

macro_rules! kind_constructors {
    ($($(#[$meta:meta])* $fn_name:ident => $kind:ident),* $(,)?) => {
        impl Error {
            $(
                $(#[$meta])*
                #[inline]
                pub fn $fn_name(detail: impl Into<String>) -> Self {
                    Self::new(ErrorKind::$kind, detail)
                }
            )*
        }
    };
}

kind_constructors! {
    /// Creates a [`ErrorKind::Cancelled`] error.
    cancelled => Cancelled,
    /// Creates a [`ErrorKind::Unknown`] error.
    unknown => Unknown,
    /// Creates a [`ErrorKind::InvalidArgument`] error.
    invalid_argument => InvalidArgument,
    /// Creates a [`ErrorKind::Timeout`] error.
    timeout => Timeout,
    /// Creates a [`ErrorKind::NotFound`] error.
    not_found => NotFound,
    /// Creates a [`ErrorKind::AlreadyExists`] error.
    already_exists => AlreadyExists,
    /// Creates a [`ErrorKind::PermissionDenied`] error.
    permission_denied => PermissionDenied,
    /// Creates a [`ErrorKind::ResourceExhausted`] error.
    resource_exhausted => ResourceExhausted,
    /// Creates a [`ErrorKind::FailedPrecondition`] error.
    failed_precondition => FailedPrecondition,
    /// Creates a [`ErrorKind::Aborted`] error.
    aborted => Aborted,
    /// Creates a [`ErrorKind::OutOfRange`] error.
    out_of_range => OutOfRange,
    /// Creates a [`ErrorKind::Unimplemented`] error.
    unimplemented => Unimplemented,
    /// Creates a [`ErrorKind::Internal`] error.
    internal => Internal,
    /// Creates a [`ErrorKind::Unavailable`] error.
    unavailable => Unavailable,
    /// Creates a [`ErrorKind::DataLoss`] error.
    data_loss => DataLoss,
    /// Creates a [`ErrorKind::Unauthenticated`] error.
    unauthenticated => Unauthenticated,
    /// Creates a [`ErrorKind::Exception`] error.
    ///
    /// Normally produced only by [`try_to_result`](crate::convert::try_to_result).
    exception => Exception,
}

impl Error {
    /// Creates an error of the given kind and detail.
    #[inline]
    pub fn new(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self { kind, detail: detail.into() }
    }

    /// Creates the [`ErrorKind::Ok`] success marker with an empty detail.
    #[inline]
    pub fn ok() -> Self {
        Self::from(ErrorKind::Ok)
    }

    /// Returns the kind of this error.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the free-text detail.
    #[must_use]
    #[inline]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Returns `true` iff the kind is [`ErrorKind::Ok`].
    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.kind.is_ok()
    }

    /// Attributes the error to a named parameter.
    ///
    /// Keeps the kind and rewrites the detail to `"{name}: {detail}"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use status_rail::{Error, ErrorKind};
    ///
    /// let err = Error::data_loss("bad").with_name("foo");
    /// assert_eq!(err.kind(), ErrorKind::DataLoss);
    /// assert_eq!(err.detail(), "foo: bad");
    /// ```
    #[inline]
    pub fn with_name(self, name: impl Display) -> Self {
        Self { kind: self.kind, detail: format!("{}: {}", name, self.detail) }
    }

    /// Converts a status marker into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns `Err(self)` unless the kind is [`ErrorKind::Ok`].
    #[inline]
    pub fn into_result(self) -> Result<(), Error> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Consumes the error, returning its kind and detail.
    #[must_use]
    #[inline]
    pub fn into_parts(self) -> (ErrorKind, String) {
        (self.kind, self.detail)
    }
}

/// Free-function form of [`Error::is_ok`].
#[must_use]
#[inline]
pub fn is_ok(error: &Error) -> bool {
    error.is_ok()
}

/// Returns a copy of `error` attributed to `name`.
///
/// See [`Error::with_name`].
#[inline]
pub fn with_name(error: &Error, name: impl Display) -> Error {
    error.clone().with_name(name)
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self { kind, detail: String::new() }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Error: [{}] {}]", self.kind, self.detail)
    }
}

impl core::error::Error for Error {}
