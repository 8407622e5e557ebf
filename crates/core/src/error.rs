//! Core error types for AnuKit using Railway-Oriented Programming.
//!
//! [`Error`] is the universal error captured at every try-boundary. It is what
//! a [`Pipe`](crate::Pipe) carries once a stage fails. [`StateError`] covers
//! reads from an [`Outcome`](crate::Outcome) in the wrong state, and
//! [`UnwrapError`] is what the `unwrap_or_throw` family hands back.

use std::error::Error as StdError;
use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use crate::propagate::PropagateError;
use crate::value::ErrorValue;

/// The standard Result type for fallible AnuKit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Universal error captured by the try-boundaries.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Message(String),

    // Common std failures keep their own display text
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    ParseInt(#[from] ParseIntError),

    #[error(transparent)]
    ParseFloat(#[from] ParseFloatError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Any(#[from] anyhow::Error),

    // Any other error value, boxed; display and source come from the inner error
    #[error(transparent)]
    Other(Box<dyn StdError + Send + Sync>),

    #[error("task failed: {reason}")]
    TaskFailed { reason: String },
}

impl Error {
    /// Create an error from a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Box an arbitrary error value.
    pub fn other<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Other(Box::new(error))
    }

    /// Create a task failure error.
    pub fn task_failed(reason: impl Into<String>) -> Self {
        Self::TaskFailed {
            reason: reason.into(),
        }
    }

    /// Whether this error came from reading an outcome in the wrong state.
    #[must_use]
    pub const fn is_state_error(&self) -> bool {
        matches!(self, Self::State(_))
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::Message(message.to_owned())
    }
}

impl<E> From<UnwrapError<E>> for Error
where
    E: ErrorValue + Send + Sync + 'static,
{
    fn from(error: UnwrapError<E>) -> Self {
        match error {
            UnwrapError::State(state) => Self::State(state),
            UnwrapError::Propagated(propagated) => Self::other(propagated),
        }
    }
}

/// Access to an outcome that does not hold what the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("result is uninitialized (NONE)")]
    Uninitialized,

    #[error("result is uninitialized: {context}")]
    UninitializedWith { context: String },

    #[error("result holds a success value, not an error")]
    NotAnError,
}

impl StateError {
    /// Create an uninitialized error carrying caller context.
    pub fn uninitialized_with(context: impl Into<String>) -> Self {
        Self::UninitializedWith {
            context: context.into(),
        }
    }

    /// Whether the outcome was in the `NONE` state.
    #[must_use]
    pub const fn is_uninitialized(&self) -> bool {
        matches!(self, Self::Uninitialized | Self::UninitializedWith { .. })
    }
}

/// Failure returned by [`Outcome::unwrap_or_throw`](crate::Outcome::unwrap_or_throw).
///
/// The two variants stay distinct: reading a `NONE` outcome is a state
/// violation, while unwrapping an `ERR` outcome escalates the captured error.
#[derive(Debug)]
pub enum UnwrapError<E> {
    /// The outcome was uninitialized.
    State(StateError),
    /// The outcome held an error, now raised as a propagation wrapper.
    Propagated(PropagateError<E>),
}

impl<E> UnwrapError<E> {
    /// Whether the unwrap failed on a `NONE` outcome.
    #[must_use]
    pub const fn is_uninitialized(&self) -> bool {
        matches!(self, Self::State(state) if state.is_uninitialized())
    }

    /// Borrow the propagation wrapper, if this is an escalated error.
    #[must_use]
    pub const fn as_propagated(&self) -> Option<&PropagateError<E>> {
        match self {
            Self::Propagated(propagated) => Some(propagated),
            Self::State(_) => None,
        }
    }

    /// Take the propagation wrapper, if this is an escalated error.
    #[must_use]
    pub fn into_propagated(self) -> Option<PropagateError<E>> {
        match self {
            Self::Propagated(propagated) => Some(propagated),
            Self::State(_) => None,
        }
    }
}

impl<E: fmt::Display> fmt::Display for UnwrapError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::State(state) => fmt::Display::fmt(state, f),
            Self::Propagated(propagated) => fmt::Display::fmt(propagated, f),
        }
    }
}

impl<E: ErrorValue> StdError for UnwrapError<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::State(_) => None,
            Self::Propagated(propagated) => propagated.source(),
        }
    }
}

impl<E> From<StateError> for UnwrapError<E> {
    fn from(state: StateError) -> Self {
        Self::State(state)
    }
}

impl<E> From<PropagateError<E>> for UnwrapError<E> {
    fn from(propagated: PropagateError<E>) -> Self {
        Self::Propagated(propagated)
    }
}
