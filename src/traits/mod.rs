//! Core traits for fail-fast composition.
//!
//! - [`Bind`]: monadic bind shared by `Result` and `Option`
//! - [`HasError`]: object-safe error probe used to join heterogeneous results
//! - [`ResultExt`]: naming and kind checks on `Result<T, Error>`
//! - [`TraceResultExt`]: `tracing` events for failures (requires `tracing`)
//!
//! # Examples
//!
//! ```
//! use status_rail::traits::Bind;
//!
//! let lifted: Option<i32> = <Option<()>>::lift(42);
//! assert_eq!(lifted.bind(|x| (x > 0).then_some(x * 2)), Some(84));
//! ```

pub mod bind;
pub mod has_error;
pub mod result_ext;
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use bind::Bind;
pub use has_error::HasError;
pub use result_ext::ResultExt;
#[cfg(feature = "tracing")]
pub use tracing_ext::TraceResultExt;
