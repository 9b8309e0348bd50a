//! Value types: the error model, the `Result` alias and the chaining wrapper.
//!
//! # Examples
//!
//! ```
//! use status_rail::{Error, ErrorKind, Result};
//!
//! fn lookup(id: u32) -> Result<&'static str> {
//!     match id {
//!         1 => Ok("alice"),
//!         _ => Err(Error::not_found(format!("user {id}"))),
//!     }
//! }
//!
//! assert_eq!(lookup(1), Ok("alice"));
//! assert_eq!(lookup(7).unwrap_err().kind(), ErrorKind::NotFound);
//! ```
use smallvec::SmallVec;

pub mod chain;
pub mod display;
pub mod error;
pub mod error_kind;

pub use chain::*;
pub use display::*;
pub use error::*;
pub use error_kind::*;

/// The crate's result type: a success value or an [`Error`].
///
/// The error parameter defaults to [`Error`] but can be overridden, since the
/// combinators work for any single error type fixed across a chain.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// SmallVec-backed collection used when gathering errors from many results.
///
/// Uses inline storage for one element, the common case when joining a
/// handful of independent computations.
pub type ErrorVec<E = Error> = SmallVec<[E; 1]>;
