//! The closed set of failure categories carried by [`Error`](crate::types::Error).
//!
//! The kinds follow the canonical status codes used by gRPC and `absl::Status`,
//! plus an [`ErrorKind::Exception`] tag reserved for panics captured by
//! [`try_to_result`](crate::convert::try_to_result).

use core::fmt::{self, Display};
use core::str::FromStr;

use crate::types::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Category of an [`Error`].
///
/// The enumeration is closed: every failure produced by this crate maps to
/// exactly one of these tags. Each tag has a stable integer [`code`](Self::code)
/// equal to its declaration order and a fixed [`display name`](Self::name).
///
/// # Examples
///
/// ```
/// use status_rail::ErrorKind;
///
/// assert_eq!(ErrorKind::NotFound.name(), "NotFound");
/// assert_eq!(ErrorKind::from_code(5), Some(ErrorKind::NotFound));
/// assert!(ErrorKind::Ok.is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum ErrorKind {
    Ok = 0,
    #[cfg_attr(feature = "serde", serde(rename = "Canceled"))]
    Cancelled,
    #[default]
    Unknown,
    InvalidArgument,
    Timeout,
    NotFound,
    AlreadyExists,
    PermissionDenied,
    ResourceExhausted,
    FailedPrecondition,
    Aborted,
    OutOfRange,
    Unimplemented,
    Internal,
    Unavailable,
    DataLoss,
    Unauthenticated,
    Exception,
}

impl ErrorKind {
    /// Every kind, in code order.
    pub const ALL: [ErrorKind; 18] = [
        ErrorKind::Ok,
        ErrorKind::Cancelled,
        ErrorKind::Unknown,
        ErrorKind::InvalidArgument,
        ErrorKind::Timeout,
        ErrorKind::NotFound,
        ErrorKind::AlreadyExists,
        ErrorKind::PermissionDenied,
        ErrorKind::ResourceExhausted,
        ErrorKind::FailedPrecondition,
        ErrorKind::Aborted,
        ErrorKind::OutOfRange,
        ErrorKind::Unimplemented,
        ErrorKind::Internal,
        ErrorKind::Unavailable,
        ErrorKind::DataLoss,
        ErrorKind::Unauthenticated,
        ErrorKind::Exception,
    ];

    /// Returns the fixed display name of this kind.
    ///
    /// The match is exhaustive, so adding a kind without a name fails to compile.
    #[must_use]
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            ErrorKind::Ok => "Ok",
            ErrorKind::Cancelled => "Canceled",
            ErrorKind::Unknown => "Unknown",
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::Timeout => "Timeout",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::AlreadyExists => "AlreadyExists",
            ErrorKind::PermissionDenied => "PermissionDenied",
            ErrorKind::ResourceExhausted => "ResourceExhausted",
            ErrorKind::FailedPrecondition => "FailedPrecondition",
            ErrorKind::Aborted => "Aborted",
            ErrorKind::OutOfRange => "OutOfRange",
            ErrorKind::Unimplemented => "Unimplemented",
            ErrorKind::Internal => "Internal",
            ErrorKind::Unavailable => "Unavailable",
            ErrorKind::DataLoss => "DataLoss",
            ErrorKind::Unauthenticated => "Unauthenticated",
            ErrorKind::Exception => "Exception",
        }
    }

    /// Returns the stable numeric code of this kind.
    #[must_use]
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Looks up a kind by its numeric code.
    ///
    /// Returns `None` for codes outside the enumeration.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// Returns `true` only for [`ErrorKind::Ok`].
    #[must_use]
    #[inline]
    pub const fn is_ok(self) -> bool {
        matches!(self, ErrorKind::Ok)
    }

    /// Iterates over every kind in code order.
    pub fn iter() -> impl ExactSizeIterator<Item = ErrorKind> + Clone {
        Self::ALL.into_iter()
    }
}

/// Free-function form of [`ErrorKind::name`].
#[must_use]
#[inline]
pub const fn display_name(kind: ErrorKind) -> &'static str {
    kind.name()
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ErrorKind {
    type Err = Error;

    /// Parses a display name such as `"OutOfRange"`.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorKind::InvalidArgument`] error for unknown names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::invalid_argument(alloc::format!("unknown error kind `{s}`")))
    }
}
