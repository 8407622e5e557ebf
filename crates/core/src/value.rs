//! The [`ErrorValue`] trait: what an outcome's error slot can hold.
//!
//! An error payload is either *error-like* (it implements
//! [`std::error::Error`] and can be chained as a cause) or a *plain value*
//! such as a string, a code, or a domain struct. The distinction is decided
//! statically per type rather than by inspecting values at runtime.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::num::{ParseFloatError, ParseIntError};
use std::str::ParseBoolError;

use crate::error::{Error, StateError};

/// A value usable as the error side of an [`Outcome`](crate::Outcome).
///
/// Plain values only need `Debug + Display`:
///
/// ```
/// use anukit_core::ErrorValue;
///
/// #[derive(Debug)]
/// struct QuotaExceeded(u32);
///
/// impl std::fmt::Display for QuotaExceeded {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "quota exceeded by {}", self.0)
///     }
/// }
///
/// impl ErrorValue for QuotaExceeded {}
/// ```
pub trait ErrorValue: fmt::Debug + fmt::Display {
    /// This value as a chainable error, when it is one.
    fn as_error(&self) -> Option<&(dyn StdError + 'static)> {
        None
    }

    /// Human-readable description of the error.
    fn error_message(&self) -> String {
        self.to_string()
    }
}

macro_rules! plain_values {
    ($($ty:ty),* $(,)?) => {
        $(impl ErrorValue for $ty {})*
    };
}

macro_rules! error_values {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ErrorValue for $ty {
                fn as_error(&self) -> Option<&(dyn StdError + 'static)> {
                    Some(self)
                }
            }
        )*
    };
}

plain_values!(
    String,
    Cow<'static, str>,
    char,
    bool,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
);

impl ErrorValue for str {}

impl<E: ErrorValue + ?Sized> ErrorValue for &E {
    fn as_error(&self) -> Option<&(dyn StdError + 'static)> {
        (**self).as_error()
    }

    fn error_message(&self) -> String {
        (**self).error_message()
    }
}

error_values!(
    Error,
    StateError,
    std::io::Error,
    std::fmt::Error,
    ParseIntError,
    ParseFloatError,
    ParseBoolError,
    std::str::Utf8Error,
    std::string::FromUtf8Error,
);

impl ErrorValue for Box<dyn StdError + Send + Sync> {
    fn as_error(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&**self)
    }
}

impl ErrorValue for anyhow::Error {
    fn as_error(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&**self)
    }
}
