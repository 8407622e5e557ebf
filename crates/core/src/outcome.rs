//! The tri-state [`Outcome`] container and its Railway-Oriented combinators.
//!
//! An outcome is exactly one of a success value (`OK`), an error value
//! (`ERR`), or nothing at all (`NONE`). The state and payload never change
//! after construction. The only mutable part is an optional diagnostic
//! message attached with [`Outcome::intercept`].
//!
//! Writing the message takes `self` or `&mut self`, so there is a single
//! writer at a time. An outcome shared across threads behind a lock follows
//! the same rule.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::error::{Error, StateError, UnwrapError};
use crate::propagate::PropagateError;
use crate::value::ErrorValue;

const ESCALATION_MESSAGE: &str = "Error occurred";
const UNINITIALIZED_MESSAGE: &str = "result is uninitialized";

/// Which of the three states an [`Outcome`] is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    Ok,
    Err,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum Slot<T, E> {
    Ok(T),
    Err(E),
    None,
}

/// Tri-state result: a success value, an error value, or nothing.
///
/// # Examples
///
/// ```
/// use anukit_core::{Outcome, State};
///
/// let parsed: Outcome<i32, String> = Outcome::ok(42);
/// assert_eq!(parsed.state(), State::Ok);
/// assert_eq!(parsed.unwrap_or_throw().ok(), Some(42));
///
/// let failed: Outcome<i32, String> = Outcome::err("bad input".to_owned()).intercept("parsing port");
/// let raised = failed.unwrap_or_throw().unwrap_err();
/// assert_eq!(raised.to_string(), "parsing port: bad input");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Outcome<T, E> {
    #[serde(rename = "state")]
    slot: Slot<T, E>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl<T, E> Outcome<T, E> {
    /// Create a success outcome.
    pub const fn ok(value: T) -> Self {
        Self::from_parts(Slot::Ok(value), None)
    }

    /// Create an error outcome.
    pub const fn err(error: E) -> Self {
        Self::from_parts(Slot::Err(error), None)
    }

    /// Create an error outcome with a diagnostic message attached.
    pub fn err_with_message(error: E, message: impl Into<String>) -> Self {
        Self::from_parts(Slot::Err(error), Some(message.into()))
    }

    /// Create an uninitialized outcome.
    pub const fn none() -> Self {
        Self::from_parts(Slot::None, None)
    }

    pub(crate) const fn from_parts(slot: Slot<T, E>, message: Option<String>) -> Self {
        Self { slot, message }
    }

    pub(crate) fn into_parts(self) -> (Slot<T, E>, Option<String>) {
        (self.slot, self.message)
    }

    #[must_use]
    pub const fn state(&self) -> State {
        match self.slot {
            Slot::Ok(_) => State::Ok,
            Slot::Err(_) => State::Err,
            Slot::None => State::None,
        }
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.slot, Slot::Ok(_))
    }

    #[must_use]
    pub const fn is_err(&self) -> bool {
        matches!(self.slot, Slot::Err(_))
    }

    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self.slot, Slot::None)
    }

    /// The success value, if this outcome holds one.
    #[must_use]
    pub const fn try_get_ok(&self) -> Option<&T> {
        match &self.slot {
            Slot::Ok(value) => Some(value),
            Slot::Err(_) | Slot::None => None,
        }
    }

    /// The error value, if this outcome holds one.
    #[must_use]
    pub const fn try_get_err(&self) -> Option<&E> {
        match &self.slot {
            Slot::Err(error) => Some(error),
            Slot::Ok(_) | Slot::None => None,
        }
    }

    /// Take the success value, discarding any error.
    #[must_use]
    pub fn into_ok(self) -> Option<T> {
        match self.slot {
            Slot::Ok(value) => Some(value),
            Slot::Err(_) | Slot::None => None,
        }
    }

    /// Take the error value, discarding any success.
    #[must_use]
    pub fn into_err(self) -> Option<E> {
        match self.slot {
            Slot::Err(error) => Some(error),
            Slot::Ok(_) | Slot::None => None,
        }
    }

    /// The raw error value.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Uninitialized`] for a `NONE` outcome and
    /// [`StateError::NotAnError`] for an `OK` one.
    pub const fn get_error(&self) -> Result<&E, StateError> {
        match &self.slot {
            Slot::Err(error) => Ok(error),
            Slot::None => Err(StateError::Uninitialized),
            Slot::Ok(_) => Err(StateError::NotAnError),
        }
    }

    /// The attached diagnostic message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Attach a diagnostic message, replacing any previous one.
    pub fn intercept(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach a diagnostic message in place, replacing any previous one.
    pub fn set_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.message = Some(message.into());
        self
    }

    /// Run `f` on the error value, only in the `ERR` state.
    pub fn on_error<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Slot::Err(ref error) = self.slot {
            f(error);
        }
        self
    }

    /// Transform the success value; the message is carried over.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U, E> {
        let slot = match self.slot {
            Slot::Ok(value) => Slot::Ok(f(value)),
            Slot::Err(error) => Slot::Err(error),
            Slot::None => Slot::None,
        };
        Outcome::from_parts(slot, self.message)
    }

    /// Transform the error value; the message is carried over.
    pub fn map_err<E2, F: FnOnce(E) -> E2>(self, f: F) -> Outcome<T, E2> {
        let slot = match self.slot {
            Slot::Ok(value) => Slot::Ok(value),
            Slot::Err(error) => Slot::Err(f(error)),
            Slot::None => Slot::None,
        };
        Outcome::from_parts(slot, self.message)
    }

    /// Borrow the payload, keeping state and message.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        let slot = match &self.slot {
            Slot::Ok(value) => Slot::Ok(value),
            Slot::Err(error) => Slot::Err(error),
            Slot::None => Slot::None,
        };
        Outcome::from_parts(slot, self.message.clone())
    }
}

impl<T, E: ErrorValue> Outcome<T, E> {
    /// Human-readable description of the error side.
    ///
    /// `NONE` reports `"result is uninitialized"`. An `OK` outcome has no
    /// error and yields `None`.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        match &self.slot {
            Slot::Err(error) => Some(error.error_message()),
            Slot::None => Some(UNINITIALIZED_MESSAGE.to_owned()),
            Slot::Ok(_) => None,
        }
    }

    /// Take the success value or raise the failure.
    ///
    /// # Errors
    ///
    /// A `NONE` outcome fails with [`StateError::Uninitialized`]. An `ERR`
    /// outcome fails with a [`PropagateError`] around the error value.
    pub fn unwrap_or_throw(self) -> Result<T, UnwrapError<E>> {
        match self.slot {
            Slot::Ok(value) => Ok(value),
            Slot::None => Err(StateError::Uninitialized.into()),
            Slot::Err(error) => Err(escalate(error, self.message).into()),
        }
    }

    /// Take the success value or raise the failure under `custom_message`.
    ///
    /// The custom message replaces the attached one before the failure is
    /// built. A success value is returned as is.
    ///
    /// # Errors
    ///
    /// A `NONE` outcome fails with [`StateError::UninitializedWith`]. An
    /// `ERR` outcome fails with a [`PropagateError`] around the error value.
    pub fn unwrap_or_throw_with(
        self,
        custom_message: impl Into<String>,
    ) -> Result<T, UnwrapError<E>> {
        let custom_message = custom_message.into();
        match self.slot {
            Slot::Ok(value) => Ok(value),
            Slot::None => Err(StateError::uninitialized_with(custom_message).into()),
            Slot::Err(error) => Err(escalate(error, Some(custom_message)).into()),
        }
    }

    /// Convert to an `Option`, logging the failure if there is one.
    #[must_use]
    pub fn into_option_logged(self) -> Option<T> {
        match self.slot {
            Slot::Ok(value) => Some(value),
            Slot::Err(e) => {
                error!(context = self.message.as_deref(), "Operation failed: {}", e.error_message());
                None
            }
            Slot::None => {
                error!(context = self.message.as_deref(), "Operation produced no result");
                None
            }
        }
    }

    /// Get the value or a default, logging the failure if there is one.
    pub fn or_default_logged(self, default: T) -> T {
        self.into_option_logged().unwrap_or(default)
    }
}

impl<T> Outcome<T, Error> {
    /// Run a fallible computation, capturing its failure as `ERR`.
    ///
    /// This is the try-boundary: a failure never escapes as a live error.
    ///
    /// ```
    /// use anukit_core::Outcome;
    ///
    /// let parsed = Outcome::try_wrap(|| "42".parse::<i32>());
    /// assert_eq!(parsed.try_get_ok(), Some(&42));
    ///
    /// let broken = Outcome::try_wrap(|| "x".parse::<i32>());
    /// assert!(broken.is_err());
    /// ```
    pub fn try_wrap<X, F>(supplier: F) -> Self
    where
        F: FnOnce() -> Result<T, X>,
        X: Into<Error>,
    {
        match supplier() {
            Ok(value) => Self::ok(value),
            Err(e) => {
                let captured = e.into();
                debug!(error = %captured, "Captured failure at try-boundary");
                Self::err(captured)
            }
        }
    }
}

fn escalate<E: ErrorValue>(error: E, message: Option<String>) -> PropagateError<E> {
    let text = if error.as_error().is_some() {
        message.unwrap_or_else(|| ESCALATION_MESSAGE.to_owned())
    } else {
        match message {
            Some(context) => format!("{context}: {error}"),
            None => error.to_string(),
        }
    };
    warn!(escalated = %text, "Escalating captured error");
    PropagateError::with_message(text, error)
}

impl<T, E> Default for Outcome<T, E> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(error) => Self::err(error),
        }
    }
}

impl<T, E> From<Option<T>> for Outcome<T, E> {
    fn from(option: Option<T>) -> Self {
        option.map_or_else(Self::none, Self::ok)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::arithmetic_side_effects)]

    use std::cell::Cell;
    use std::error::Error as StdError;

    use super::*;

    #[test]
    fn test_ok_outcome() {
        let outcome: Outcome<&str, Error> = Outcome::ok("Success");

        assert!(outcome.is_ok());
        assert!(!outcome.is_err());
        assert!(!outcome.is_none());
        assert_eq!(outcome.state(), State::Ok);
        assert_eq!(outcome.try_get_ok(), Some(&"Success"));
        assert!(outcome.try_get_err().is_none());
        assert_eq!(outcome.unwrap_or_throw().unwrap(), "Success");
    }

    #[test]
    fn test_ok_outcome_with_custom_message_returns_value() {
        let outcome: Outcome<&str, Error> = Outcome::ok("Success");
        let value = outcome.unwrap_or_throw_with("never shown");
        assert_eq!(value.unwrap(), "Success");
    }

    #[test]
    fn test_err_outcome_with_error_like_payload() {
        let outcome: Outcome<String, Error> =
            Outcome::err(Error::from(std::io::Error::other("File error")));

        assert!(outcome.is_err());
        assert!(!outcome.is_ok());
        assert!(!outcome.is_none());
        assert_eq!(outcome.error_message().as_deref(), Some("File error"));

        let raised = outcome.unwrap_or_throw().unwrap_err();
        assert!(!raised.is_uninitialized());
        assert_eq!(raised.to_string(), "Error occurred");
        let source = raised.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("File error"));
    }

    #[test]
    fn test_err_outcome_with_plain_payload() {
        let outcome: Outcome<i32, String> = Outcome::err("Simple error".to_owned());

        assert_eq!(outcome.error_message().as_deref(), Some("Simple error"));
        let raised = outcome.unwrap_or_throw().unwrap_err();
        let wrapper = raised.into_propagated().unwrap();
        assert_eq!(wrapper.message(), "Simple error");
        assert_eq!(wrapper.error().map(String::as_str), Some("Simple error"));
        assert!(wrapper.source().is_none());
    }

    #[test]
    fn test_plain_payload_is_prefixed_by_message() {
        let outcome: Outcome<i32, &str> = Outcome::err_with_message("timeout", "calling billing");
        let raised = outcome.unwrap_or_throw().unwrap_err();
        assert_eq!(raised.to_string(), "calling billing: timeout");
    }

    #[test]
    fn test_custom_message_overrides_attached_message() {
        let outcome: Outcome<String, Error> =
            Outcome::err_with_message(Error::msg("Invalid"), "Custom message");

        let raised = outcome.unwrap_or_throw_with("Fail reason").unwrap_err();
        assert!(raised.to_string().contains("Fail reason"));
    }

    #[test]
    fn test_on_error_runs_only_for_err() {
        let handled = Cell::new(false);
        let _ = Outcome::<(), &str>::err_with_message("Invalid", "Custom message")
            .on_error(|_| handled.set(true));
        assert!(handled.get());

        let skipped = Cell::new(false);
        let _ = Outcome::<i32, &str>::ok(1).on_error(|_| skipped.set(true));
        let _ = Outcome::<i32, &str>::none().on_error(|_| skipped.set(true));
        assert!(!skipped.get());
    }

    #[test]
    fn test_none_outcome() {
        let outcome: Outcome<String, Error> = Outcome::none();

        assert!(outcome.is_none());
        assert!(!outcome.is_ok());
        assert!(!outcome.is_err());
        assert_eq!(
            outcome.error_message().as_deref(),
            Some("result is uninitialized")
        );

        let raised = outcome.unwrap_or_throw().unwrap_err();
        assert!(raised.is_uninitialized());
        assert!(raised.as_propagated().is_none());
        assert_eq!(raised.to_string(), "result is uninitialized (NONE)");
    }

    #[test]
    fn test_none_outcome_with_custom_message() {
        let outcome: Outcome<String, Error> = Outcome::none();
        let raised = outcome.unwrap_or_throw_with("loading profile").unwrap_err();
        assert_eq!(raised.to_string(), "result is uninitialized: loading profile");
    }

    #[test]
    fn test_intercept_message() {
        let outcome: Outcome<(), Error> =
            Outcome::err(Error::msg("Original error")).intercept("Intercepted context");

        assert_eq!(outcome.message(), Some("Intercepted context"));
        let raised = outcome.unwrap_or_throw().unwrap_err();
        assert!(raised.to_string().contains("Intercepted context"));
    }

    #[test]
    fn test_intercept_last_write_wins() {
        let mut outcome: Outcome<i32, &str> = Outcome::err("e").intercept("first");
        outcome.set_message("second");
        let outcome = outcome.intercept("third");

        assert_eq!(outcome.message(), Some("third"));
        assert_eq!(outcome.state(), State::Err);
    }

    #[test]
    fn test_get_error() {
        let outcome: Outcome<String, &str> = Outcome::err("bad state");
        assert_eq!(outcome.get_error(), Ok(&"bad state"));

        let none: Outcome<String, &str> = Outcome::none();
        assert_eq!(none.get_error(), Err(StateError::Uninitialized));

        let ok: Outcome<String, &str> = Outcome::ok("fine".to_owned());
        assert_eq!(ok.get_error(), Err(StateError::NotAnError));
        assert_eq!(ok.error_message(), None);
    }

    #[test]
    fn test_ok_holding_nothing_is_not_none() {
        let outcome: Outcome<Option<i32>, &str> = Outcome::ok(None);
        assert!(outcome.is_ok());
        assert_eq!(outcome.try_get_ok(), Some(&None));
    }

    #[test]
    fn test_map_and_map_err_keep_message() {
        let doubled = Outcome::<i32, &str>::ok(21).intercept("ctx").map(|v| v * 2);
        assert_eq!(doubled.try_get_ok(), Some(&42));
        assert_eq!(doubled.message(), Some("ctx"));

        let lengths = Outcome::<i32, &str>::err("hello").map_err(str::len);
        assert_eq!(lengths.try_get_err(), Some(&5));

        let none = Outcome::<i32, &str>::none().map(|v| v + 1);
        assert!(none.is_none());
    }

    #[test]
    fn test_conversions() {
        let from_ok: Outcome<i32, &str> = Ok(1).into();
        let from_err: Outcome<i32, &str> = Err("no").into();
        let from_some: Outcome<i32, &str> = Some(3).into();
        let from_none: Outcome<i32, &str> = None.into();

        assert!(from_ok.is_ok());
        assert!(from_err.is_err());
        assert_eq!(from_some.into_ok(), Some(3));
        assert!(from_none.is_none());
        assert!(Outcome::<i32, &str>::default().is_none());
    }

    #[test]
    fn test_logged_fallbacks() {
        let ok: Outcome<i32, &str> = Outcome::ok(42);
        assert_eq!(ok.into_option_logged(), Some(42));

        let err: Outcome<i32, &str> = Outcome::err("test");
        assert_eq!(err.or_default_logged(99), 99);

        let none: Outcome<i32, &str> = Outcome::none();
        assert_eq!(none.into_option_logged(), None);
    }

    #[test]
    fn test_try_wrap_success() {
        let outcome = Outcome::try_wrap(|| Ok::<_, Error>("hello"));
        assert_eq!(outcome.try_get_ok(), Some(&"hello"));
    }

    #[test]
    fn test_try_wrap_failure() {
        let outcome: Outcome<String, Error> =
            Outcome::try_wrap(|| Err(std::io::Error::other("fail!")));
        assert!(outcome.is_err());
        assert_eq!(outcome.error_message().as_deref(), Some("fail!"));
    }

    #[test]
    fn test_serde_shape() {
        let ok: Outcome<i32, String> = Outcome::ok(7);
        assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"state":{"ok":7}}"#);

        let err: Outcome<i32, String> = Outcome::err("bad".to_owned()).intercept("ctx");
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"state":{"err":"bad"},"message":"ctx"}"#);

        let restored: Outcome<i32, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, err);

        let none: Outcome<i32, String> = serde_json::from_str(r#"{"state":"none"}"#).unwrap();
        assert!(none.is_none());
    }
}
