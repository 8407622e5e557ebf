//! Structured propagation of arbitrary error values.
//!
//! [`PropagateError`] lets any value travel as an error: a string, a code,
//! a domain struct, or a real error type. The payload is kept verbatim so
//! callers can inspect it after the failure has been raised.

use std::error::Error as StdError;
use std::fmt;

use crate::value::ErrorValue;

const UNKNOWN_ERROR: &str = "Unknown error";

/// Error wrapper carrying an opaque payload, a message, and an optional cause.
///
/// The message is resolved once at construction. An explicit message wins,
/// then the payload's display form, then `"Unknown error"`.
#[derive(Debug)]
pub struct PropagateError<E> {
    error: Option<E>,
    message: String,
    cause: Option<Box<dyn StdError + Send + Sync>>,
}

impl<E: fmt::Display> PropagateError<E> {
    /// Wrap an error payload; the message is its display form.
    pub fn new(error: E) -> Self {
        Self::from_parts(None, None, Some(error))
    }

    /// Wrap an error payload under an explicit message.
    pub fn with_message(message: impl Into<String>, error: E) -> Self {
        Self::from_parts(Some(message.into()), None, Some(error))
    }

    /// Wrap an error payload under an explicit message and underlying cause.
    pub fn with_cause(
        message: impl Into<String>,
        cause: impl Into<Box<dyn StdError + Send + Sync>>,
        error: E,
    ) -> Self {
        Self::from_parts(Some(message.into()), Some(cause.into()), Some(error))
    }

    /// Build a wrapper from optional parts, resolving the message.
    pub fn from_parts(
        message: Option<String>,
        cause: Option<Box<dyn StdError + Send + Sync>>,
        error: Option<E>,
    ) -> Self {
        let message = message
            .or_else(|| error.as_ref().map(ToString::to_string))
            .unwrap_or_else(|| UNKNOWN_ERROR.to_owned());
        Self {
            error,
            message,
            cause,
        }
    }
}

impl<E> PropagateError<E> {
    /// A wrapper with neither payload nor message.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            error: None,
            message: UNKNOWN_ERROR.to_owned(),
            cause: None,
        }
    }

    /// The original payload.
    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        self.error.as_ref()
    }

    /// Take the original payload.
    #[must_use]
    pub fn into_error(self) -> Option<E> {
        self.error
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The explicitly chained cause, if one was given.
    #[must_use]
    pub fn explicit_cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

impl<E: ErrorValue> PropagateError<E> {
    /// The underlying cause: the explicit one, else an error-like payload.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn StdError + 'static)> {
        match self.cause.as_deref() {
            Some(cause) => Some(cause),
            None => self.error.as_ref().and_then(ErrorValue::as_error),
        }
    }
}

impl<E> fmt::Display for PropagateError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl<E: ErrorValue> StdError for PropagateError<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause()
    }
}

impl<E: ErrorValue + 'static> ErrorValue for PropagateError<E> {
    fn as_error(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self)
    }
}
