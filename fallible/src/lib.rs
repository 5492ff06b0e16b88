//! Algebraic containers for optional values ([`Maybe`]) and fallible
//! computations ([`Outcome`]), tagged errors, and a small set of function
//! combinators.

mod combinator;
mod maybe;
mod outcome;
mod pipe;
mod tagged;

#[cfg(feature = "experimental")]
pub use combinator::tap_detached;
pub use combinator::{compose, constant, flip, identity, tap, Composed};
pub use maybe::{Falsy, Maybe};
pub use outcome::Outcome;
pub use pipe::{pipe, Pipe};
pub use tagged::{is_tagged, tag_of, Tagged, TryCatchError, UnwrapError};
