#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # AnuKit
//!
//! Exception-free error handling: tri-state outcomes, short-circuiting pipes,
//! and structured error propagation.
//!
//! This crate re-exports [`anukit_core`] and adds the tokio-backed async
//! helpers on top of the try-boundary.
//!
//! ```
//! use anukit::prelude::*;
//!
//! let port = Pipe::new(|| "8080".parse::<u16>())
//!     .then(|p| if p == 0 { Err(Error::msg("port zero")) } else { Ok(p) })
//!     .into_result()
//!     .intercept("reading listen port");
//!
//! assert_eq!(port.unwrap_or_throw().ok(), Some(8080));
//! ```

pub use anukit_core;
pub use anukit_core::{
    Error, ErrorValue, Outcome, Pipe, PropagateError, Result, SafeStream, State, StateError,
    UnwrapError, safe_map, try_wrap, wrap_list,
};

pub mod task;

pub use task::{run_async, try_wrap_async};

/// Common imports for AnuKit users.
pub mod prelude {
    pub use anukit_core::prelude::*;

    pub use crate::task::{run_async, try_wrap_async};
}
