//! Free-standing helpers around the try-boundary.

use std::fmt::Display;

use tracing::debug;

use crate::error::Error;
use crate::outcome::Outcome;

/// Run a fallible computation, capturing its failure as `ERR`.
///
/// Same as [`Outcome::try_wrap`].
pub fn try_wrap<T, X, F>(supplier: F) -> Outcome<T, Error>
where
    F: FnOnce() -> Result<T, X>,
    X: Into<Error>,
{
    Outcome::try_wrap(supplier)
}

/// Apply `function` to `input`, or return `fallback` if it fails.
///
/// ```
/// use anukit_core::safe_map;
///
/// assert_eq!(safe_map("42", -1, str::parse::<i32>), 42);
/// assert_eq!(safe_map("oops", -1, str::parse::<i32>), -1);
/// ```
pub fn safe_map<T, R, X, F>(input: T, fallback: R, function: F) -> R
where
    F: FnOnce(T) -> Result<R, X>,
    X: Display,
{
    match function(input) {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, "Mapping failed, using fallback");
            fallback
        }
    }
}

/// Wrap a collection for element-wise fallible mapping.
pub fn wrap_list<C: IntoIterator>(collection: C) -> SafeStream<C::IntoIter> {
    SafeStream {
        inner: collection.into_iter(),
    }
}

/// A sequence whose elements are mapped through the try-boundary.
#[derive(Debug, Clone)]
#[must_use = "streams are lazy and do nothing unless mapped"]
pub struct SafeStream<I> {
    inner: I,
}

impl<I: Iterator> SafeStream<I> {
    /// Lazily map every element, one outcome per element, in order.
    ///
    /// A failing element yields `ERR` and does not stop the stream.
    pub fn map_safe<R, X, F>(self, mut mapper: F) -> impl Iterator<Item = Outcome<R, Error>>
    where
        F: FnMut(I::Item) -> Result<R, X>,
        X: Into<Error>,
    {
        self.inner.map(move |item| try_wrap(|| mapper(item)))
    }
}
