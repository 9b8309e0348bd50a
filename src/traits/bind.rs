//! Monadic bind for fail-fast containers.
//!
//! [`Bind`] abstracts over `Result<T, E>` (which propagates its error) and
//! `Option<T>` (which propagates absence). Both obey the same short-circuit
//! law: the continuation is never invoked on a failed or empty input, and the
//! failure is forwarded unchanged.

/// Containers that can feed their success value into a fallible continuation.
///
/// # Laws
///
/// For any `a`, `m`, `f` and `g`:
///
/// 1. **Left identity**: `M::lift(a).bind(f) == f(a)`
/// 2. **Right identity**: `m.bind(M::lift) == m`
/// 3. **Associativity**: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
///
/// # Examples
///
/// ```
/// use status_rail::{Bind, Error, Result};
///
/// fn half(x: i32) -> Result<i32> {
///     if x % 2 == 0 { Ok(x / 2) } else { Err(Error::invalid_argument("odd")) }
/// }
///
/// let eight: Result<i32> = Ok(8);
/// assert_eq!(eight.bind(half).bind(half), Ok(2));
///
/// let six: Result<i32> = Ok(6);
/// assert!(six.bind(half).bind(half).is_err());
/// ```
pub trait Bind: Sized {
    /// The success value fed to the continuation.
    type Value;

    /// The same container shape holding a `U`.
    type Output<U>;

    /// Applies `f` to the success value, or forwards the failure untouched.
    fn bind<U, F>(self, f: F) -> Self::Output<U>
    where
        F: FnOnce(Self::Value) -> Self::Output<U>;

    /// Wraps a plain value as a success.
    fn lift<U>(value: U) -> Self::Output<U>;
}

impl<T, E> Bind for Result<T, E> {
    type Value = T;
    type Output<U> = Result<U, E>;

    #[inline]
    fn bind<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Ok(value) => f(value),
            Err(error) => Err(error),
        }
    }

    #[inline]
    fn lift<U>(value: U) -> Result<U, E> {
        Ok(value)
    }
}

impl<T> Bind for Option<T> {
    type Value = T;
    type Output<U> = Option<U>;

    #[inline]
    fn bind<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Some(value) => f(value),
            None => None,
        }
    }

    #[inline]
    fn lift<U>(value: U) -> Option<U> {
        Some(value)
    }
}

/// Free-function form of [`Bind::bind`].
///
/// # Examples
///
/// ```
/// use status_rail::{bind, of, Error, Result};
///
/// fn non_zero(x: i32) -> Result<i32> {
///     if x == 0 { Err(Error::invalid_argument("zero")) } else { Ok(x) }
/// }
///
/// assert_eq!(bind(of(3), non_zero), Ok(3));
/// assert_eq!(bind(of(0), non_zero), Err(Error::invalid_argument("zero")));
/// ```
#[inline]
pub fn bind<M, U, F>(input: M, f: F) -> M::Output<U>
where
    M: Bind,
    F: FnOnce(M::Value) -> M::Output<U>,
{
    input.bind(f)
}

/// Composes two fallible functions into one.
///
/// The result behaves as `|x| bind(f(x), g)`: `g` only runs when `f`
/// succeeds. See the [`compose!`](crate::compose) macro for more than two
/// functions.
///
/// # Examples
///
/// ```
/// use status_rail::traits::bind::compose;
///
/// fn non_zero(x: i32) -> Option<i32> { (x != 0).then_some(x) }
/// fn below_3(x: f64) -> Option<i32> { (x < 3.0).then(|| x.round() as i32) }
///
/// let f = compose(below_3, non_zero);
/// assert_eq!(f(-4.0), Some(-4));
/// assert_eq!(f(0.2), None);
/// assert_eq!(f(5.0), None);
/// ```
#[inline]
pub fn compose<A, M, C, F, G>(f: F, g: G) -> impl Fn(A) -> M::Output<C>
where
    M: Bind,
    F: Fn(A) -> M,
    G: Fn(M::Value) -> M::Output<C>,
{
    move |value| f(value).bind(&g)
}
