//! # AnuKit core
//!
//! Exception-free error handling using Railway-Oriented Programming.
//!
//! - [`Outcome`]: tri-state container holding a success value, an error
//!   value, or nothing.
//! - [`Pipe`]: fluent sequencer that stops at the first failure.
//! - [`PropagateError`]: raises any value as an error, keeping it intact.
//!
//! Every try-style entry point returns an [`Outcome`]. A failure only
//! becomes an `Err` again when a caller explicitly asks for it through
//! [`Outcome::unwrap_or_throw`].
//!
//! ```
//! use anukit_core::{Error, Pipe};
//!
//! let greeting = Pipe::of("anu".to_owned())
//!     .then(|s| Ok::<_, Error>(s.to_uppercase()))
//!     .then(|s| Ok::<_, Error>(s + "-KIT"))
//!     .into_result();
//!
//! assert_eq!(greeting.try_get_ok().map(String::as_str), Some("ANU-KIT"));
//! ```

pub mod error;
pub mod kit;
pub mod outcome;
pub mod pipe;
pub mod propagate;
pub mod value;

pub use error::{Error, Result, StateError, UnwrapError};
pub use kit::{SafeStream, safe_map, try_wrap, wrap_list};
pub use outcome::{Outcome, State};
pub use pipe::Pipe;
pub use propagate::PropagateError;
pub use value::ErrorValue;

/// Common imports.
///
/// ```
/// use anukit_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, StateError, UnwrapError};
    pub use crate::kit::{safe_map, try_wrap, wrap_list};
    pub use crate::outcome::{Outcome, State};
    pub use crate::pipe::Pipe;
    pub use crate::propagate::PropagateError;
    pub use crate::value::ErrorValue;
}
