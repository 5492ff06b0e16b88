use std::fmt::Debug;
use std::panic::{self, UnwindSafe};

use crate::maybe::Maybe;
use crate::tagged::{TryCatchError, UnwrapError};

/// A computation that either produced a value or failed with a typed error.
///
/// # Motivation
///
/// `Outcome` is the fallible twin of [`Maybe`]: two variants, the same
/// consume-and-rebuild adapters, plus an error channel that carries a typed
/// error value instead of discarding the failure. The [`catch`] and
/// [`catch_async`] constructors are the boundary where foreign code that
/// fails by panicking is normalized into this channel as a
/// [`TryCatchError`].
///
/// [`catch`]: Outcome::catch
/// [`catch_async`]: Outcome::catch_async
///
/// # Use
///
/// ```rust
/// use fallible::Outcome;
///
/// fn parse(input: &str) -> Outcome<i64, String> {
///     match input.parse() {
///         Ok(n) => Outcome::ok(n),
///         Err(_) => Outcome::err(format!("not a number: {input:?}")),
///     }
/// }
///
/// let doubled = parse("21").map(|n| n * 2);
/// assert_eq!(doubled, Outcome::ok(42));
///
/// // Err short-circuits the chain and survives unchanged.
/// let failed = parse("nope").map(|n| n * 2).and_then(parse_is_positive);
/// assert_eq!(failed, Outcome::err("not a number: \"nope\"".to_string()));
///
/// fn parse_is_positive(n: i64) -> Outcome<i64, String> {
///     if n > 0 {
///         Outcome::ok(n)
///     } else {
///         Outcome::err(format!("not positive: {n}"))
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<A, E> {
    /// A success value.
    Ok(A),
    /// An error value.
    Err(E),
}

impl<A, E> Outcome<A, E> {
    pub fn ok(value: A) -> Self {
        Outcome::Ok(value)
    }

    pub fn err(error: E) -> Self {
        Outcome::Err(error)
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    /// Apply `f` to the success value; an `Err` passes through unchanged.
    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> Outcome<B, E> {
        match self {
            Outcome::Ok(v) => Outcome::Ok(f(v)),
            Outcome::Err(e) => Outcome::Err(e),
        }
    }

    /// Apply `f` to the error value; an `Ok` passes through unchanged.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<A, F> {
        match self {
            Outcome::Ok(v) => Outcome::Ok(v),
            Outcome::Err(e) => Outcome::Err(f(e)),
        }
    }

    /// Chain into `f`, flattening one level of wrapping. `Err` short-circuits.
    pub fn and_then<B>(self, f: impl FnOnce(A) -> Outcome<B, E>) -> Outcome<B, E> {
        match self {
            Outcome::Ok(v) => f(v),
            Outcome::Err(e) => Outcome::Err(e),
        }
    }

    /// Exhaustive dispatch: exactly one of the two handlers runs.
    pub fn fold<B>(self, on_ok: impl FnOnce(A) -> B, on_err: impl FnOnce(E) -> B) -> B {
        match self {
            Outcome::Ok(v) => on_ok(v),
            Outcome::Err(e) => on_err(e),
        }
    }

    /// [`unwrap`](Outcome::unwrap) with a caller-supplied message.
    pub fn expect(self, message: &str) -> A {
        match self {
            Outcome::Ok(v) => v,
            Outcome::Err(_) => panic::panic_any(UnwrapError::new(message)),
        }
    }

    pub fn unwrap_or(self, default: A) -> A {
        match self {
            Outcome::Ok(v) => v,
            Outcome::Err(_) => default,
        }
    }

    /// The success value, discarding any error.
    pub fn ok_value(self) -> Maybe<A> {
        match self {
            Outcome::Ok(v) => Maybe::Some(v),
            Outcome::Err(_) => Maybe::None,
        }
    }

    /// The error value, discarding any success.
    pub fn err_value(self) -> Maybe<E> {
        match self {
            Outcome::Ok(_) => Maybe::None,
            Outcome::Err(e) => Maybe::Some(e),
        }
    }
}

impl<A, E: Debug> Outcome<A, E> {
    /// Return the success value, raising an [`UnwrapError`] on `Err`.
    ///
    /// The default message embeds the error value; the error is delivered as
    /// a panic payload so a `catch_unwind` boundary can recover it typed.
    pub fn unwrap(self) -> A {
        match self {
            Outcome::Ok(v) => v,
            Outcome::Err(e) => panic::panic_any(UnwrapError::new(format!(
                "called `Outcome::unwrap` on an `Err` value: {e:?}"
            ))),
        }
    }
}

impl<A: Debug, E> Outcome<A, E> {
    /// Return the error value, raising an [`UnwrapError`] on `Ok`.
    ///
    /// Misuse guard for code that expects a failure; the message embeds the
    /// success value that was found instead.
    pub fn unwrap_err(self) -> E {
        match self {
            Outcome::Ok(v) => panic::panic_any(UnwrapError::new(format!(
                "called `Outcome::unwrap_err` on an `Ok` value: {v:?}"
            ))),
            Outcome::Err(e) => e,
        }
    }
}

impl<A> Outcome<A, TryCatchError> {
    /// Run `f`, converting a panic into the error channel.
    ///
    /// A normal return wraps in `Ok`; any panic is caught and carried as the
    /// cause of a [`TryCatchError`].
    ///
    /// ```rust
    /// use fallible::Outcome;
    ///
    /// let ok = Outcome::catch(|| 21 * 2);
    /// assert_eq!(ok.unwrap_or(0), 42);
    ///
    /// let caught: Outcome<i64, _> = Outcome::catch(|| panic!("boom"));
    /// let err = caught.err_value().unwrap();
    /// assert_eq!(err.cause_str(), Some("boom"));
    /// ```
    pub fn catch(f: impl FnOnce() -> A + UnwindSafe) -> Self {
        match panic::catch_unwind(f) {
            Ok(v) => Outcome::Ok(v),
            Err(cause) => Outcome::Err(TryCatchError::new(cause)),
        }
    }
}

#[cfg(feature = "experimental")]
impl<A> Outcome<A, TryCatchError> {
    /// Run the future produced by `f`, converting a panic into the error
    /// channel.
    ///
    /// Same contract as [`catch`](Outcome::catch) for asynchronous work: the
    /// returned future resolves only after `f`'s future has settled, and a
    /// panic raised at any point (while constructing the future or while
    /// polling it) is caught and carried as the cause of a
    /// [`TryCatchError`].
    pub async fn catch_async<Fut>(f: impl FnOnce() -> Fut) -> Self
    where
        Fut: std::future::Future<Output = A>,
    {
        use futures::FutureExt;

        match panic::AssertUnwindSafe(async move { f().await })
            .catch_unwind()
            .await
        {
            Ok(v) => Outcome::Ok(v),
            Err(cause) => Outcome::Err(TryCatchError::new(cause)),
        }
    }
}
