//! Reusable fallible checks built on [`Result`](crate::types::Result).
//!
//! Validators return their input unchanged on success and an
//! [`ErrorKind::OutOfRange`](crate::ErrorKind::OutOfRange) error otherwise,
//! so they slot into a chain like any other fallible function:
//!
//! ```
//! use status_rail::{chain, of, validate_in, Range, ResultExt};
//!
//! let speed = Range::between(0.0, 2.5).step(0.5);
//! let checked = (chain(of(1.5)) | speed.as_fn()).into_inner().named("speed");
//! assert_eq!(checked, Ok(1.5));
//!
//! let unit = validate_in(&["m/s", "km/h"], "mph").named("unit");
//! assert_eq!(unit.unwrap_err().detail(), r#"unit: mph is not in {"m/s", "km/h"}"#);
//! ```

pub mod membership;
pub mod range;
pub mod traits;

pub use membership::{one_of, validate_in, OneOf};
pub use range::{Range, DEFAULT_STEP_TOLERANCE};
pub use traits::{RangeValue, Validator};
