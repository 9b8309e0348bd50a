//! Pipe-style sugar for [`Bind`](crate::traits::Bind).
//!
//! `Result` and `Option` are foreign types, so the `|` operator is provided on
//! the [`Chain`] newtype instead:
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
//! let ok = chain(of(2.0)) | divide_4_by | divide_4_by;
//! assert_eq!(ok.into_inner(), Ok(2.0));
//!
//! let failed = chain(of(0.0)) | divide_4_by | divide_4_by;
//! assert_eq!(failed.into_inner(), Err(Error::invalid_argument("divide by 0")));
//! ```
//!
//! `chain(r) | f1 | f2 | f3` is exactly `bind(bind(bind(r, f1), f2), f3)`.

use core::fmt::{self, Display};
use core::ops::{BitOr, Deref};

use crate::traits::Bind;
use crate::types::{Error, ResultDisplay};

/// Wrapper enabling `|` as left-associative, fail-fast bind.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chain<M>(M);

impl<M> Chain<M> {
    /// Starts a chain from a `Result` or `Option`.
    #[inline]
    pub fn new(inner: M) -> Self {
        Self(inner)
    }

    /// Ends the chain, returning the wrapped container.
    #[inline]
    pub fn into_inner(self) -> M {
        self.0
    }
}

impl<M: Bind> Chain<M> {
    /// Named form of the `|` operator.
    #[inline]
    pub fn then<U, F>(self, f: F) -> Chain<M::Output<U>>
    where
        F: FnOnce(M::Value) -> M::Output<U>,
    {
        Chain(self.0.bind(f))
    }
}

/// Starts a [`Chain`].
#[inline]
pub fn chain<M>(inner: M) -> Chain<M> {
    Chain::new(inner)
}

impl<T, U, E, F> BitOr<F> for Chain<Result<T, E>>
where
    F: FnOnce(T) -> Result<U, E>,
{
    type Output = Chain<Result<U, E>>;

    #[inline]
    fn bitor(self, f: F) -> Self::Output {
        Chain(self.0.bind(f))
    }
}

impl<T, U, F> BitOr<F> for Chain<Option<T>>
where
    F: FnOnce(T) -> Option<U>,
{
    type Output = Chain<Option<U>>;

    #[inline]
    fn bitor(self, f: F) -> Self::Output {
        Chain(self.0.bind(f))
    }
}

impl<M> Deref for Chain<M> {
    type Target = M;

    #[inline]
    fn deref(&self) -> &M {
        &self.0
    }
}

impl<M> From<M> for Chain<M> {
    #[inline]
    fn from(inner: M) -> Self {
        Chain(inner)
    }
}

impl<T: Display> Display for Chain<Result<T, Error>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&ResultDisplay::new(&self.0), f)
    }
}
