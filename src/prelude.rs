//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use status_rail::prelude::*;
//!
//! fn parse_port(raw: &str) -> Result<u16> {
//!     raw.parse::<u16>().map_err(|e| Error::invalid_argument(e.to_string()))
//! }
//!
//! let port = chain(of("8080")) | parse_port | Range::<u16>::between(1024, 49151).as_fn();
//! assert_eq!(port.into_inner().named("port"), Ok(8080));
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`compose!`], [`maybe_error!`], [`all_errors!`]
//! - **Types**: [`Error`], [`ErrorKind`], [`Result`], [`Chain`], [`Range`], [`OneOf`]
//! - **Functions**: [`of`], [`some`], [`bind`], [`chain`], [`validate_in`], [`one_of`]
//! - **Traits**: [`Bind`], [`HasError`], [`ResultExt`], [`DisplayResult`], [`Validator`]

// Macros
pub use crate::{all_errors, compose, maybe_error};

// Core types
pub use crate::types::{Chain, Error, ErrorKind, Result};
pub use crate::validation::{OneOf, Range};

// Functions
pub use crate::convert::{of, some};
#[cfg(feature = "std")]
pub use crate::convert::try_to_result;
pub use crate::traits::bind::bind;
pub use crate::types::chain;
pub use crate::validation::{one_of, validate_in};

// Traits
pub use crate::traits::{Bind, HasError, ResultExt};
pub use crate::types::DisplayResult;
pub use crate::validation::Validator;
