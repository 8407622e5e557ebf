//! Fluent, short-circuiting pipeline over an [`Outcome`].
//!
//! A [`Pipe`] is either active (holding a success value) or failed (holding
//! the first captured error). Stages run only while the pipe is active; once
//! failed, every later stage is skipped and the original error is kept.

use tracing::trace;

use crate::error::Error;
use crate::outcome::{Outcome, Slot};

/// Sequencer of fallible transformations over a single value.
///
/// # Examples
///
/// ```
/// use anukit_core::{Error, Pipe};
///
/// let port = Pipe::new(|| "8080".parse::<u16>())
///     .then(|p| if p < 1024 { Err(Error::msg("privileged port")) } else { Ok(p) })
///     .map(|p| p + 1)
///     .into_result();
///
/// assert_eq!(port.try_get_ok(), Some(&8081));
/// ```
#[derive(Debug)]
#[must_use = "a pipe does nothing until its result is read"]
pub struct Pipe<T> {
    result: Outcome<T, Error>,
}

impl<T> Pipe<T> {
    /// Start a pipe from a plain value.
    pub const fn of(value: T) -> Self {
        Self {
            result: Outcome::ok(value),
        }
    }

    /// Start a pipe from a fallible computation, run immediately.
    ///
    /// A failure is captured; construction never fails.
    pub fn new<X, F>(supplier: F) -> Self
    where
        F: FnOnce() -> Result<T, X>,
        X: Into<Error>,
    {
        Self {
            result: Outcome::try_wrap(supplier),
        }
    }

    /// Apply a fallible stage to the current value.
    ///
    /// Skipped entirely when the pipe has already failed.
    pub fn then<X, F>(self, modifier: F) -> Self
    where
        F: FnOnce(T) -> Result<T, X>,
        X: Into<Error>,
    {
        match self.result.into_parts() {
            (Slot::Ok(value), _) => Self::new(|| modifier(value)),
            (slot, message) => {
                trace!("Pipe already failed, skipping stage");
                Self {
                    result: Outcome::from_parts(slot, message),
                }
            }
        }
    }

    /// Apply an infallible stage to the current value.
    pub fn map<F>(self, modifier: F) -> Self
    where
        F: FnOnce(T) -> T,
    {
        Self {
            result: self.result.map(modifier),
        }
    }

    /// Transform the whole held outcome, success or failure.
    ///
    /// This is the recovery hook: the transformer sees the failed outcome
    /// and may return a substitute value, which becomes a fresh success.
    pub fn map_result<R, X, F>(self, transformer: F) -> Outcome<R, Error>
    where
        F: FnOnce(Outcome<T, Error>) -> Result<R, X>,
        X: Into<Error>,
    {
        Outcome::try_wrap(|| transformer(self.result))
    }

    /// Whether an earlier stage failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        !self.result.is_ok()
    }

    #[must_use]
    pub const fn result(&self) -> &Outcome<T, Error> {
        &self.result
    }

    pub fn into_result(self) -> Outcome<T, Error> {
        self.result
    }
}

impl<T> From<Outcome<T, Error>> for Pipe<T> {
    fn from(result: Outcome<T, Error>) -> Self {
        Self { result }
    }
}
