//! Discriminated error values.
//!
//! Errors produced by this crate carry an explicit string discriminant (a
//! *tag*) alongside the usual `Error` machinery, so mixed error values can be
//! told apart by reading the tag instead of matching on concrete types.

use std::any::Any;
use std::error::Error;
use std::fmt;

use thiserror::Error;

/// An error value carrying a string discriminant identifying its concrete
/// kind.
///
/// The tag is a `'static` string constant per implementing type, so two
/// values of the same type always report the same tag. Downstream code
/// should obtain tags via [`tag_of`] rather than reading this trait on a
/// concrete type it happens to know about.
pub trait Tagged: Error {
    /// Discriminant identifying the concrete error kind.
    fn tag(&self) -> &'static str;
}

/// Raised when a container is unwrapped on the variant that does not hold
/// the requested payload.
///
/// This is a misuse signal, not an expected runtime condition: it is always
/// delivered as a panic payload (via [`std::panic::panic_any`]) and never
/// returned in-band. A `catch_unwind` boundary can downcast the payload back
/// to this type and read its tag.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct UnwrapError {
    message: String,
}

impl UnwrapError {
    /// Tag reported by every `UnwrapError`.
    pub const TAG: &'static str = "UnwrapError";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Tagged for UnwrapError {
    fn tag(&self) -> &'static str {
        Self::TAG
    }
}

/// Wraps a panic payload caught while running a caller-supplied function,
/// normalizing it into the [`Outcome`](crate::Outcome) error channel.
///
/// The original payload is preserved unmodified as the cause. Panics raised
/// by `panic!("...")` carry `&str`/`String` payloads, which
/// [`cause_str`](TryCatchError::cause_str) recovers; anything else stays
/// reachable through [`cause`](TryCatchError::cause) as `dyn Any`.
pub struct TryCatchError {
    cause: Box<dyn Any + Send>,
}

impl TryCatchError {
    /// Tag reported by every `TryCatchError`.
    pub const TAG: &'static str = "TryCatchError";

    pub fn new(cause: Box<dyn Any + Send>) -> Self {
        Self { cause }
    }

    /// The caught payload, untouched.
    pub fn cause(&self) -> &(dyn Any + Send) {
        self.cause.as_ref()
    }

    /// The caught payload, if it was a string message.
    pub fn cause_str(&self) -> Option<&str> {
        self.cause
            .downcast_ref::<&'static str>()
            .copied()
            .or_else(|| self.cause.downcast_ref::<String>().map(String::as_str))
    }

    pub fn into_cause(self) -> Box<dyn Any + Send> {
        self.cause
    }
}

impl fmt::Debug for TryCatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryCatchError")
            .field("cause", &self.cause_str().unwrap_or("<non-string payload>"))
            .finish()
    }
}

impl fmt::Display for TryCatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cause_str() {
            Some(msg) => write!(f, "caught panic: {msg}"),
            None => write!(f, "caught panic with non-string payload"),
        }
    }
}

impl Error for TryCatchError {}

impl Tagged for TryCatchError {
    fn tag(&self) -> &'static str {
        Self::TAG
    }
}

/// Whether `err` is one of this crate's tagged errors.
///
/// Membership is decided by downcast, not by the presence of a tag-shaped
/// field: a foreign error type that happens to expose a look-alike
/// discriminant is rejected.
pub fn is_tagged(err: &(dyn Error + 'static)) -> bool {
    tag_of(err).is_some()
}

/// The tag of `err`, if it is one of this crate's tagged errors.
///
/// Read discriminants through this function; a `Some` return is the signal
/// that the tag is trustworthy.
pub fn tag_of(err: &(dyn Error + 'static)) -> Option<&'static str> {
    if let Some(e) = err.downcast_ref::<UnwrapError>() {
        Some(e.tag())
    } else if let Some(e) = err.downcast_ref::<TryCatchError>() {
        Some(e.tag())
    } else {
        None
    }
}
