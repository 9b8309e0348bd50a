//! Status-coded `Result` combinators for fail-fast pipelines.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `status_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining Fallible Steps
//!
//! ```
//! use status_rail::{chain, of, Error, Result};
//!
//! fn divide_4_by(x: f64) -> Result<f64> {
//!     if x == 0.0 {
//!         return Err(Error::invalid_argument("divide by 0"));
//!     }
//!     Ok(4.0 / x)
//! }
//!
//! let result = chain(of(0.0)) | divide_4_by | divide_4_by;
//! assert_eq!(result.to_string(), "[Result: [Error: [InvalidArgument] divide by 0]]");
//! ```
//!
//! ## Joining Independent Results
//!
//! ```
//! use status_rail::{maybe_error, Error, Result};
//!
//! let a: Result<f64> = Ok(6.5);
//! let b: Result<i32> = Err(Error::unknown("lost"));
//!
//! assert_eq!(maybe_error!(a, b), Some(Error::unknown("lost")));
//! ```
//!
//! ## Validating Parameters
//!
//! ```
//! use status_rail::{Range, Validator};
//!
//! let result = Range::new().from(0).step(3).validate_named(14, "foo");
//! assert!(result.unwrap_err().detail().starts_with("foo: 14 is 0.33"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Entry points (`of`, `try_to_result`) and multi-result joins
pub mod convert;
/// Variadic `compose!`, `maybe_error!` and `all_errors!` macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Free-function error constructors, one per kind
pub mod status;
/// Core traits: `Bind`, `HasError`, `ResultExt`
pub mod traits;
/// Error model, `Result` alias and `Chain`
pub mod types;
/// Range and membership validators
pub mod validation;

pub use convert::*;
pub use traits::bind::bind;
pub use traits::{Bind, HasError, ResultExt};
#[cfg(feature = "tracing")]
pub use traits::TraceResultExt;
pub use types::{
    chain, display_name, is_ok, with_name, Chain, DisplayResult, Error, ErrorKind, ErrorVec,
    Result, ResultDisplay,
};
pub use validation::{
    one_of, validate_in, OneOf, Range, RangeValue, Validator, DEFAULT_STEP_TOLERANCE,
};
