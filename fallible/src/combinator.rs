//! Stateless function combinators, independent of the container types.

use std::panic::{self, AssertUnwindSafe};

use crate::tagged::TryCatchError;

/// Return the input unchanged.
pub fn identity<A>(value: A) -> A {
    value
}

/// A function that ignores its argument and always returns `value`.
pub fn constant<A: Clone, B>(value: A) -> impl Fn(B) -> A {
    move |_| value.clone()
}

/// Reverse the argument order of a binary function.
pub fn flip<A, B, C>(f: impl Fn(A, B) -> C) -> impl Fn(B, A) -> C {
    move |b, a| f(a, b)
}

/// Run `f` against `value` for its side effect, then return `value`
/// unchanged.
///
/// The side effect is best-effort: a panic raised by `f` is caught, logged
/// at `warn`, and discarded. Failure of the observer never reaches the
/// primary value flow.
///
/// ```rust
/// use fallible::tap;
///
/// let v = tap(|n| assert!(*n > 0), 42);
/// assert_eq!(v, 42);
///
/// // A failing observer is invisible to the caller.
/// let v = tap(|_: &i64| panic!("observer failed"), 42);
/// assert_eq!(v, 42);
/// ```
pub fn tap<A>(f: impl FnOnce(&A), value: A) -> A {
    if let Err(cause) = panic::catch_unwind(AssertUnwindSafe(|| f(&value))) {
        let err = TryCatchError::new(cause);
        tracing::warn!(error = %err, "discarding failed tap side effect");
    }
    value
}

/// The fire-and-forget asynchronous branch of [`tap`]: spawn the future
/// produced by `f` as a detached task and return `value` immediately.
///
/// The task is never joined; its eventual failure is logged at `warn` and
/// discarded. Must be called within a tokio runtime.
#[cfg(feature = "experimental")]
pub fn tap_detached<A, Fut>(f: impl FnOnce(&A) -> Fut, value: A) -> A
where
    Fut: std::future::Future<Output = ()> + Send + 'static,
{
    use futures::FutureExt;

    let effect = f(&value);
    tokio::spawn(async move {
        if let Err(cause) = AssertUnwindSafe(effect).catch_unwind().await {
            let err = TryCatchError::new(cause);
            tracing::warn!(error = %err, "discarding failed detached tap side effect");
        }
    });
    value
}

/// Wrap a unary function so further functions can be chained onto it
/// left-to-right.
///
/// Each [`compose`](Composed::compose) call returns a fresh [`Composed`]
/// wrapping the accumulated chain; [`call`](Composed::call) runs it.
///
/// ```rust
/// use fallible::compose;
///
/// let pipeline = compose(|n: i64| n + 1)
///     .compose(|n| n * 2)
///     .compose(|n| format!("result: {n}"));
///
/// assert_eq!(pipeline.call(20), "result: 42");
/// ```
pub fn compose<F>(f: F) -> Composed<F> {
    Composed(f)
}

/// A left-to-right pipeline of unary functions. See [`compose`].
pub struct Composed<F>(F);

impl<F> Composed<F> {
    /// Chain `next` after the accumulated pipeline.
    pub fn compose<A, B, C, G>(self, next: G) -> Composed<impl Fn(A) -> C>
    where
        F: Fn(A) -> B,
        G: Fn(B) -> C,
    {
        Composed(move |input| next((self.0)(input)))
    }

    /// Run the accumulated pipeline on `input`.
    pub fn call<A, B>(&self, input: A) -> B
    where
        F: Fn(A) -> B,
    {
        (self.0)(input)
    }
}
