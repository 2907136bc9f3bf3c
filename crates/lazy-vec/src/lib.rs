//! A growable vector with incremental reallocation.
//!
//! [`LazyVec`] behaves like an ordinary growable array with amortized *O*(1)
//! push and pop, but it never copies all of its elements in a single call.
//! When the buffer fills up a new buffer of twice the size is allocated and the
//! old elements are migrated one at a time by the pushes and pops which follow.
//!
//! ```
//! use lazy_vec::{try_lazy_vec, LazyVec};
//!
//! let mut vec = LazyVec::try_new()?;
//!
//! for n in 0..17 {
//!     vec.try_push(n)?;
//! }
//!
//! assert_eq!(vec.capacity(), 32);
//! assert_eq!(vec[16], 16);
//! assert_eq!(vec.pop(), Some(16));
//!
//! let other = try_lazy_vec![9, 8, 7];
//! assert_eq!(other, [9, 8, 7]);
//! # Ok::<_, lazy_vec::Error>(())
//! ```
//!
//! All allocating operations are fallible and report an [`Error`] instead of
//! aborting. Allocations made through the [`Global`] allocator can be bounded
//! with the [`limit`] module.

// Parts of the allocator plumbing follow the Rust Project under the MIT license.
//
// Copyright 2014-2023 The Rust Project Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT
// or https://opensource.org/licenses/MIT>, at your option. Files in the project
// may not be copied, modified, or distributed except according to those terms.

#![no_std]
#![allow(clippy::comparison_chain)]
#![allow(clippy::len_without_is_empty)]

#[cfg(feature = "std")]
extern crate std as rust_std;

#[cfg(feature = "alloc")]
extern crate alloc as rust_alloc;

// This is here for forward compatibility when we can support allocation-free
// execution.
#[cfg(not(feature = "alloc"))]
compile_error!("The `alloc` feature is currently required to build lazy-vec.");

#[macro_use]
mod public_macros;

pub use self::alloc::{AllocError, Allocator, Global};
pub mod alloc;

pub use self::clone::TryClone;
pub mod clone;

pub use self::error::Error;
mod error;

pub use self::iter::{TryExtend, TryFromIterator, TryFromIteratorIn};
pub mod iter;

pub use self::lazy_vec::{Cursor, LazyVec, DEFAULT_CAPACITY};
pub mod lazy_vec;

pub mod limit;

#[cfg(not(feature = "std"))]
mod no_std;

mod region;

pub mod prelude {
    //! Prelude for common traits used in combination with this crate.
    pub use crate::{TryClone, TryExtend, TryFromIterator, TryFromIteratorIn};
}

#[cfg(test)]
mod testing;
