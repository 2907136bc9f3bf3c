//! Allocation primitives.
//!
//! Every buffer a [`LazyVec`] holds is obtained from an [`Allocator`]. The
//! [`Global`] allocator forwards to the allocator of the Rust runtime and
//! accounts for the memory it hands out against the thread-local [`limit`].
//!
//! [`LazyVec`]: crate::LazyVec
//! [`limit`]: crate::limit

pub use self::allocator::Allocator;
mod allocator;

pub use self::global::Global;
mod global;

use core::alloc::Layout;
use core::fmt;

/// Error raised while allocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocError {
    pub(crate) layout: Layout,
}

impl AllocError {
    /// The layout of the allocation which could not be satisfied.
    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to allocate {} bytes of memory",
            self.layout.size()
        )
    }
}

impl core::error::Error for AllocError {}
