//! Tracing shims for lazy-vec.
//!
//! With the `enabled` feature this re-exports the macros of the [`tracing`]
//! crate. Without it every macro expands to nothing, so that instrumented code
//! carries no cost and no dependency.
//!
//! [`tracing`]: https://docs.rs/tracing

#![no_std]

#[cfg(feature = "enabled")]
pub use ::tracing::{debug, enabled, error, event, info, trace, warn};

#[cfg(not(feature = "enabled"))]
mod disabled;
