//! Free-function constructors, one per [`ErrorKind`].
//!
//! Handy for terse call sites and for passing a constructor where a function
//! value is expected:
//!
//! ```
//! use status_rail::status;
//!
//! let errors: Vec<_> = ["a", "b"].into_iter().map(status::not_found).collect();
//! assert_eq!(errors[1].detail(), "b");
//! ```

use alloc::string::String;

use crate::types::{Error, ErrorKind};

/// Returns the [`ErrorKind::Ok`] success marker.
#[inline]
pub fn ok() -> Error {
    Error::ok()
}

macro_rules! status_fns {
    ($($fn_name:ident => $kind:ident),* $(,)?) => {
        $(
            #[doc = concat!("Creates an [`ErrorKind::", stringify!($kind), "`] error.")]
            #[inline]
            pub fn $fn_name(detail: impl Into<String>) -> Error {
                Error::new(ErrorKind::$kind, detail)
            }
        )*
    };
}

status_fns! {
    cancelled => Cancelled,
    unknown => Unknown,
    invalid_argument => InvalidArgument,
    timeout => Timeout,
    not_found => NotFound,
    already_exists => AlreadyExists,
    permission_denied => PermissionDenied,
    resource_exhausted => ResourceExhausted,
    failed_precondition => FailedPrecondition,
    aborted => Aborted,
    out_of_range => OutOfRange,
    unimplemented => Unimplemented,
    internal => Internal,
    unavailable => Unavailable,
    data_loss => DataLoss,
    unauthenticated => Unauthenticated,
    exception => Exception,
}
